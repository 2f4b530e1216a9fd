use chrono::{DateTime, FixedOffset, Local};
use quick_junit::{Report, TestCase, TestSuite};

use crate::{
    core::{errors::BuildError, traits::builder::ReportBuilder},
    gauge::messages::{ProtoHookFailure, ProtoSuiteResult},
    junit::mappers::{Failure, millis, to_test_suite},
};

const DEFAULT_REPORT_NAME: &str = "gauge";

/// Renders a suite result as a JUnit `testsuites` document.
#[derive(Clone, Debug, Default)]
pub struct JunitBuilder;

impl JunitBuilder {
    pub fn new() -> Self {
        JunitBuilder
    }

    pub fn to_report(&self, suite_result: &ProtoSuiteResult, now: DateTime<FixedOffset>) -> Report {
        let name = if suite_result.project_name.is_empty() {
            DEFAULT_REPORT_NAME
        } else {
            suite_result.project_name.as_str()
        };

        let mut report = Report::new(name);
        report.set_timestamp(now);
        report.set_time(millis(suite_result.execution_time));

        for spec_result in &suite_result.spec_results {
            report.add_test_suite(to_test_suite(spec_result, now));
        }
        if let Some(suite) = suite_hooks(name, suite_result, now) {
            report.add_test_suite(suite);
        }
        report
    }
}

impl ReportBuilder for JunitBuilder {
    #[tracing::instrument(skip_all, fields(specs = suite_result.spec_results.len()))]
    fn build(&self, suite_result: &ProtoSuiteResult) -> Result<Vec<u8>, BuildError> {
        let report = self.to_report(suite_result, Local::now().fixed_offset());
        let xml = report
            .to_string()
            .map_err(|e| BuildError::Serialize { msg: e.to_string() })?;
        Ok(xml.into_bytes())
    }
}

/// Before/After Suite hook failures have no spec to belong to, so they get
/// a suite of their own.
fn suite_hooks(
    name: &str,
    suite_result: &ProtoSuiteResult,
    now: DateTime<FixedOffset>,
) -> Option<TestSuite> {
    let hooks: [(&str, &Option<ProtoHookFailure>); 2] = [
        ("Before Suite", &suite_result.pre_hook_failure),
        ("After Suite", &suite_result.post_hook_failure),
    ];
    let cases: Vec<TestCase> = hooks
        .into_iter()
        .filter_map(|(hook, failure)| {
            let failure = Failure::hook(hook, failure.as_ref()?);
            let mut case = TestCase::new(hook, failure.into_status());
            case.set_classname(name);
            Some(case)
        })
        .collect();

    if cases.is_empty() {
        return None;
    }
    let mut suite = TestSuite::new(name);
    suite.set_timestamp(now);
    suite.add_test_cases(cases);
    Some(suite)
}
