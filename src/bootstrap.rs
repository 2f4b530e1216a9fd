use std::sync::Arc;

use tokio::{io::AsyncRead, sync::mpsc::channel};

use crate::{
    config::{ConfigError, Settings},
    constants::{EVENT_CHANNEL_SIZE, EXIT_FAILURE},
    core::{
        errors::ReportError, orchestrator::ReportOrchestrator,
        pipeline::reporting::handle_events, traits::builder::ReportBuilder,
    },
    gauge::listener::{ListenerError, connect, read_messages},
    native::{
        artifact::ArtifactWriter,
        directory::{DirectoryResolver, resolve_reports_root},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),
    #[error("Listener task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl PluginError {
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

/// Moves into the project root, connects to the host and reports every
/// completed suite until the host is done with the plugin.
#[tracing::instrument(skip_all, fields(project_root = %settings.project_root.display()))]
pub async fn run(
    settings: Settings,
    builder: Arc<dyn ReportBuilder>,
) -> Result<usize, PluginError> {
    enter_project_root(&settings)?;

    let stream = connect(&settings.host, settings.port).await?;
    serve(&settings, builder, stream).await
}

fn enter_project_root(settings: &Settings) -> Result<(), ConfigError> {
    std::env::set_current_dir(&settings.project_root).map_err(|source| {
        ConfigError::ChangeDirectory {
            path: settings.project_root.clone(),
            source,
        }
    })?;
    tracing::debug!(
        "Changed directory from {} to {}",
        settings.plugin_dir.display(),
        settings.project_root.display()
    );
    Ok(())
}

/// Wires the event source to the orchestrator and waits for both to finish.
///
/// Relative report roots resolve against the current directory, so this must
/// run after [`enter_project_root`].
pub async fn serve<R>(
    settings: &Settings,
    builder: Arc<dyn ReportBuilder>,
    reader: R,
) -> Result<usize, PluginError>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let reports_root = resolve_reports_root(settings.reports_dir.as_deref());
    let orchestrator = ReportOrchestrator::new(
        DirectoryResolver::new(reports_root, settings.naming),
        builder,
        ArtifactWriter::new(),
    );

    let (event_tx, event_rx) = channel(EVENT_CHANNEL_SIZE);
    let listener = read_messages(reader, event_tx);

    let reports = match handle_events(event_rx, &orchestrator).await {
        Ok(reports) => reports,
        Err(e) => {
            listener.abort();
            return Err(e.into());
        }
    };
    listener.await??;

    Ok(reports)
}
