use tokio::sync::mpsc::Receiver;

use crate::core::{
    domain::{HostEvent, ReportLocation},
    errors::ReportError,
    orchestrator::ReportOrchestrator,
};

/// Confirmation relayed to the user once a report is on disk.
pub fn success_message(location: &ReportLocation) -> String {
    format!("Successfully generated xml-report to => {}", location)
}

/// Hands every completed suite to the orchestrator, one at a time.
///
/// Stops on a kill request, when the event source goes away, or at the first
/// report that cannot be produced. Returns the number of reports written.
#[tracing::instrument(skip_all)]
pub async fn handle_events(
    mut event_rx: Receiver<HostEvent>,
    orchestrator: &ReportOrchestrator,
) -> Result<usize, ReportError> {
    let mut reports = 0;

    while let Some(event) = event_rx.recv().await {
        match event {
            HostEvent::SuiteCompleted(suite_result) => {
                let location = orchestrator.on_run_complete(&suite_result).await?;
                println!("{}", success_message(&location));
                tracing::info!("Report written to {}", location);
                reports += 1;
            }
            HostEvent::Kill => {
                tracing::debug!("Kill request, stop handling events");
                break;
            }
        }
    }

    Ok(reports)
}
