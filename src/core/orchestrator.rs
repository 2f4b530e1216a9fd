use std::sync::Arc;

use crate::{
    core::{domain::ReportLocation, errors::ReportError, traits::builder::ReportBuilder},
    gauge::messages::ProtoSuiteResult,
    native::{artifact::ArtifactWriter, directory::DirectoryResolver},
};

/// Resolves the run directory, builds the document and writes it.
#[derive(Clone, Debug)]
pub struct ReportOrchestrator {
    resolver: DirectoryResolver,
    builder: Arc<dyn ReportBuilder>,
    writer: ArtifactWriter,
}

impl ReportOrchestrator {
    pub fn new(
        resolver: DirectoryResolver,
        builder: Arc<dyn ReportBuilder>,
        writer: ArtifactWriter,
    ) -> Self {
        Self {
            resolver,
            builder,
            writer,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn on_run_complete(
        &self,
        suite_result: &ProtoSuiteResult,
    ) -> Result<ReportLocation, ReportError> {
        let location = self.resolver.resolve().await?;
        tracing::debug!("Report location: {}", location);

        let content = self.builder.build(suite_result)?;
        tracing::debug!("Built report of {} bytes", content.len());

        self.writer.write(&location, &content).await?;
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{RESULT_FILE, XML_REPORT_DIR},
        core::{domain::NamingStrategy, errors::BuildError, traits::builder::MockReportBuilder},
    };
    use tempfile::TempDir;

    fn create_orchestrator(
        root: &std::path::Path,
        naming: NamingStrategy,
        builder: MockReportBuilder,
    ) -> ReportOrchestrator {
        ReportOrchestrator::new(
            DirectoryResolver::new(root, naming),
            Arc::new(builder),
            ArtifactWriter::new(),
        )
    }

    #[tokio::test]
    async fn test_successful_report() {
        let tmp = TempDir::new().unwrap();
        let mut builder = MockReportBuilder::new();
        builder
            .expect_build()
            .times(1)
            .returning(|_| Ok(b"<testsuites/>".to_vec()));
        let orchestrator = create_orchestrator(tmp.path(), NamingStrategy::Timestamped, builder);

        let location = orchestrator
            .on_run_complete(&ProtoSuiteResult::default())
            .await
            .unwrap();

        assert!(location.dir().starts_with(tmp.path().join(XML_REPORT_DIR)));
        assert_eq!(
            std::fs::read(location.dir().join(RESULT_FILE)).unwrap(),
            b"<testsuites/>"
        );
    }

    #[tokio::test]
    async fn test_builder_receives_suite_result() {
        let tmp = TempDir::new().unwrap();
        let suite_result = ProtoSuiteResult {
            project_name: "checkout".to_string(),
            ..Default::default()
        };
        let mut builder = MockReportBuilder::new();
        builder
            .expect_build()
            .withf(|result| result.project_name == "checkout")
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let orchestrator = create_orchestrator(tmp.path(), NamingStrategy::FixedEmpty, builder);

        orchestrator.on_run_complete(&suite_result).await.unwrap();
    }

    #[tokio::test]
    async fn test_build_failure_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut builder = MockReportBuilder::new();
        builder.expect_build().returning(|_| {
            Err(BuildError::Serialize {
                msg: "broken".to_string(),
            })
        });
        let orchestrator = create_orchestrator(tmp.path(), NamingStrategy::FixedEmpty, builder);

        let result = orchestrator
            .on_run_complete(&ProtoSuiteResult::default())
            .await;

        assert!(matches!(result, Err(ReportError::Build(_))));
        assert!(!tmp.path().join(XML_REPORT_DIR).join(RESULT_FILE).exists());
    }

    #[tokio::test]
    async fn test_directory_failure_skips_builder() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let mut builder = MockReportBuilder::new();
        builder.expect_build().never();
        let orchestrator = create_orchestrator(&blocker, NamingStrategy::Timestamped, builder);

        let result = orchestrator
            .on_run_complete(&ProtoSuiteResult::default())
            .await;

        assert!(matches!(result, Err(ReportError::CreateDirectory { .. })));
    }

    #[tokio::test]
    async fn test_overwrite_mode_replaces_previous_report() {
        let tmp = TempDir::new().unwrap();
        let mut builder = MockReportBuilder::new();
        let mut seq = mockall::Sequence::new();
        builder
            .expect_build()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(b"first".to_vec()));
        builder
            .expect_build()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(b"second".to_vec()));
        let orchestrator = create_orchestrator(tmp.path(), NamingStrategy::FixedEmpty, builder);

        let first = orchestrator
            .on_run_complete(&ProtoSuiteResult::default())
            .await
            .unwrap();
        let second = orchestrator
            .on_run_complete(&ProtoSuiteResult::default())
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.dir(), tmp.path().join(XML_REPORT_DIR));
        assert_eq!(
            std::fs::read(second.dir().join(RESULT_FILE)).unwrap(),
            b"second"
        );
    }
}
