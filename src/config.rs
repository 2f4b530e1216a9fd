use std::{io, path::PathBuf};

use clap::Parser;

use crate::{
    constants::{
        EXECUTION_ACTION, GAUGE_HOST, OVERWRITE_REPORTS_ENV, PLUGIN_ACTION_ENV, PORT_ENV,
        PROJECT_ROOT_ENV, REPORTS_DIR_ENV,
    },
    core::domain::{NamingStrategy, overwrite_enabled},
};

/// Gauge plugin writing suite results as JUnit XML.
///
/// Gauge passes everything through the environment; the flags exist so the
/// plugin can be driven by hand.
#[derive(Debug, Parser)]
#[command(name = "xml-report", version, about)]
pub struct Cli {
    /// Accepted for compatibility with the host's launch command.
    #[arg(long)]
    pub start: bool,

    #[arg(long, env = PROJECT_ROOT_ENV)]
    pub project_root: Option<PathBuf>,

    #[arg(long, env = REPORTS_DIR_ENV)]
    pub reports_dir: Option<PathBuf>,

    #[arg(long, env = PORT_ENV)]
    pub port: Option<u16>,

    #[arg(long, env = OVERWRITE_REPORTS_ENV)]
    pub overwrite_reports: Option<String>,

    #[arg(long, env = PLUGIN_ACTION_ENV, default_value = EXECUTION_ACTION)]
    pub action: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable '{name}' is not set.")]
    MissingVariable { name: &'static str },
    #[error("Error finding current working directory: {0}")]
    WorkingDirectory(#[source] io::Error),
    #[error("Could not change directory to {}: {source}", path.display())]
    ChangeDirectory { path: PathBuf, source: io::Error },
}

/// Everything the plugin needs, read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub project_root: PathBuf,
    pub plugin_dir: PathBuf,
    pub reports_dir: Option<PathBuf>,
    pub naming: NamingStrategy,
    pub host: String,
    pub port: u16,
}

impl Cli {
    pub fn is_execution(&self) -> bool {
        self.action == EXECUTION_ACTION
    }
}

impl TryFrom<Cli> for Settings {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, ConfigError> {
        let project_root = cli
            .project_root
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ConfigError::MissingVariable {
                name: PROJECT_ROOT_ENV,
            })?;
        let port = cli.port.ok_or(ConfigError::MissingVariable { name: PORT_ENV })?;
        let plugin_dir = std::env::current_dir().map_err(ConfigError::WorkingDirectory)?;

        Ok(Settings {
            project_root,
            plugin_dir,
            reports_dir: cli.reports_dir,
            naming: NamingStrategy::select(overwrite_enabled(cli.overwrite_reports.as_deref())),
            host: GAUGE_HOST.to_string(),
            port,
        })
    }
}
