use crate::{core::errors::BuildError, gauge::messages::ProtoSuiteResult};

/// Turns a finished suite into the bytes of a report document.
#[cfg_attr(test, mockall::automock)]
pub trait ReportBuilder: std::fmt::Debug + Send + Sync {
    fn build(&self, suite_result: &ProtoSuiteResult) -> Result<Vec<u8>, BuildError>;
}
