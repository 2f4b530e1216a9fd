use std::panic;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::bootstrap::PluginError;
use crate::config::{Cli, Settings};
use crate::junit::builder::JunitBuilder;

mod bootstrap;
mod config;
mod constants;
mod core;
mod gauge;
mod junit;
mod native;


#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    set_panic_hook();

    let cli = Cli::parse();
    if !cli.is_execution() {
        tracing::info!("Nothing to do for action '{}'", cli.action);
        return ExitCode::SUCCESS;
    }

    match start(cli).await {
        Ok(reports) => {
            tracing::info!("Plugin finished after {} report(s)", reports);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            println!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn start(cli: Cli) -> Result<usize, PluginError> {
    let settings = Settings::try_from(cli)?;
    tracing::debug!("Settings: {:?}", settings);

    bootstrap::run(settings, Arc::new(JunitBuilder::new())).await
}

fn set_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        tracing::error!(
            message = "panic occurred",
            panic = %panic_info
        );
    }));
}
