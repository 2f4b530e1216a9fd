use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use itertools::Itertools;
use quick_junit::{NonSuccessKind, TestCase, TestCaseStatus, TestSuite};

use crate::gauge::messages::{
    ProtoHookFailure, ProtoItem, ProtoScenario, ProtoSpecResult, ProtoStep,
    ProtoStepExecutionResult, proto_item::ItemType,
};

const STEP_FAILURE: &str = "StepFailure";
const HOOK_FAILURE: &str = "HookFailure";

/// First reason a scenario (or spec) did not pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Failure {
    pub ty: &'static str,
    pub message: String,
    pub description: String,
}

impl Failure {
    fn step(text: &str, error_message: &str, stack_trace: &str) -> Self {
        Failure {
            ty: STEP_FAILURE,
            message: error_message.to_string(),
            description: format!("Step: {}\n{}\n{}", text, error_message, stack_trace),
        }
    }

    pub fn hook(hook: &str, failure: &ProtoHookFailure) -> Self {
        Failure {
            ty: HOOK_FAILURE,
            message: format!("{} failed: {}", hook, failure.error_message),
            description: format!("{}\n{}", failure.error_message, failure.stack_trace),
        }
    }

    pub fn into_status(self) -> TestCaseStatus {
        let mut status = TestCaseStatus::non_success(NonSuccessKind::Failure);
        status
            .set_message(self.message)
            .set_type(self.ty)
            .set_description(self.description);
        status
    }
}

/// Spec heading, or the file name for specs without one.
pub fn suite_name(spec_result: &ProtoSpecResult) -> String {
    let Some(spec) = &spec_result.proto_spec else {
        return String::new();
    };
    if spec.spec_heading.is_empty() {
        spec.file_name.clone()
    } else {
        spec.spec_heading.clone()
    }
}

pub fn millis(ms: i64) -> Duration {
    Duration::from_millis(u64::try_from(ms).unwrap_or_default())
}

pub fn to_test_suite(spec_result: &ProtoSpecResult, timestamp: DateTime<FixedOffset>) -> TestSuite {
    let name = suite_name(spec_result);
    let mut suite = TestSuite::new(name.as_str());
    suite.set_timestamp(timestamp);
    suite.set_time(millis(spec_result.execution_time));

    let Some(spec) = &spec_result.proto_spec else {
        return suite;
    };
    suite
        .extra
        .insert("package".into(), spec.file_name.as_str().into());
    suite.extra.insert(
        "skipped".into(),
        spec_result.scenario_skipped_count.to_string().into(),
    );
    if spec_result.scenario_skipped_count > 0 {
        suite.set_system_err(format!(
            "Validation failed, {} Scenarios were skipped.",
            spec_result.scenario_skipped_count
        ));
    }

    let spec_hook = spec
        .pre_hook_failure
        .as_ref()
        .map(|failure| ("Before Spec", failure))
        .or_else(|| {
            spec.post_hook_failure
                .as_ref()
                .map(|failure| ("After Spec", failure))
        });
    let spec_hook_failure = spec_hook.map(|(hook, failure)| Failure::hook(hook, failure));

    let cases = spec
        .items
        .iter()
        .filter_map(scenario_of)
        .map(|(scenario, case_name)| {
            to_test_case(scenario, case_name, &name, spec_hook_failure.clone())
        })
        .collect_vec();

    match (cases.is_empty(), spec_hook_failure) {
        (true, Some(failure)) => {
            let hook = spec_hook.map(|(hook, _)| hook).unwrap_or_default();
            let mut case = TestCase::new(hook, failure.into_status());
            case.set_classname(name.as_str());
            suite.add_test_case(case);
        }
        _ => {
            suite.add_test_cases(cases);
        }
    }
    suite
}

fn scenario_of(item: &ProtoItem) -> Option<(&ProtoScenario, String)> {
    match item.item_type() {
        ItemType::Scenario => item
            .scenario
            .as_ref()
            .map(|scenario| (scenario, scenario.scenario_heading.clone())),
        ItemType::TableDrivenScenario => item.table_driven_scenario.as_ref().and_then(|tds| {
            tds.scenario.as_ref().map(|scenario| {
                (
                    scenario,
                    format!("{} {}", scenario.scenario_heading, tds.table_row_index + 1),
                )
            })
        }),
        _ => None,
    }
}

fn to_test_case(
    scenario: &ProtoScenario,
    name: String,
    classname: &str,
    spec_hook_failure: Option<Failure>,
) -> TestCase {
    let status = if let Some(failure) = spec_hook_failure {
        failure.into_status()
    } else if scenario.skipped {
        let mut status = TestCaseStatus::skipped();
        if !scenario.skip_errors.is_empty() {
            status.set_message(scenario.skip_errors.iter().join("\n"));
        }
        status
    } else if scenario.failed {
        scenario_failure(scenario)
            .unwrap_or_else(|| Failure {
                ty: STEP_FAILURE,
                message: "Scenario failed".to_string(),
                description: String::new(),
            })
            .into_status()
    } else {
        TestCaseStatus::success()
    };

    let mut case = TestCase::new(name, status);
    case.set_classname(classname);
    case.set_time(millis(scenario.execution_time));
    case
}

pub fn scenario_failure(scenario: &ProtoScenario) -> Option<Failure> {
    if let Some(failure) = &scenario.pre_hook_failure {
        return Some(Failure::hook("Before Scenario", failure));
    }
    first_failure(&scenario.contexts)
        .or_else(|| first_failure(&scenario.scenario_items))
        .or_else(|| first_failure(&scenario.tear_down_steps))
        .or_else(|| {
            scenario
                .post_hook_failure
                .as_ref()
                .map(|failure| Failure::hook("After Scenario", failure))
        })
}

fn first_failure(items: &[ProtoItem]) -> Option<Failure> {
    items.iter().find_map(|item| match item.item_type() {
        ItemType::Step => item.step.as_ref().and_then(step_failure),
        ItemType::Concept => item.concept.as_ref().and_then(|concept| {
            first_failure(&concept.steps).or_else(|| {
                let text = concept
                    .concept_step
                    .as_ref()
                    .map(|step| step.actual_text.as_str())
                    .unwrap_or_default();
                concept
                    .concept_execution_result
                    .as_ref()
                    .and_then(|result| execution_failure(text, result))
            })
        }),
        _ => None,
    })
}

fn step_failure(step: &ProtoStep) -> Option<Failure> {
    step.step_execution_result
        .as_ref()
        .and_then(|result| execution_failure(&step.actual_text, result))
}

fn execution_failure(text: &str, result: &ProtoStepExecutionResult) -> Option<Failure> {
    if let Some(failure) = &result.pre_hook_failure {
        return Some(Failure::hook("Before Step", failure));
    }
    if let Some(execution) = result.execution_result.as_ref().filter(|r| r.failed) {
        return Some(Failure::step(
            text,
            &execution.error_message,
            &execution.stack_trace,
        ));
    }
    result
        .post_hook_failure
        .as_ref()
        .map(|failure| Failure::hook("After Step", failure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::messages::{ProtoConcept, ProtoExecutionResult, ProtoSpec};

    fn failing_step(text: &str, error: &str) -> ProtoItem {
        ProtoItem {
            item_type: ItemType::Step.into(),
            step: Some(ProtoStep {
                actual_text: text.to_string(),
                parsed_text: text.to_string(),
                step_execution_result: Some(ProtoStepExecutionResult {
                    execution_result: Some(ProtoExecutionResult {
                        failed: true,
                        error_message: error.to_string(),
                        stack_trace: "at login.rs:10".to_string(),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        }
    }

    fn passing_step(text: &str) -> ProtoItem {
        ProtoItem {
            item_type: ItemType::Step.into(),
            step: Some(ProtoStep {
                actual_text: text.to_string(),
                step_execution_result: Some(ProtoStepExecutionResult::default()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_failing_step_wins() {
        let scenario = ProtoScenario {
            failed: true,
            scenario_items: vec![
                passing_step("Open the shop"),
                failing_step("Log in", "Element not found"),
                failing_step("Pay", "Timeout"),
            ],
            ..Default::default()
        };

        let failure = scenario_failure(&scenario).unwrap();

        assert_eq!(failure.ty, STEP_FAILURE);
        assert_eq!(failure.message, "Element not found");
        assert!(failure.description.starts_with("Step: Log in\n"));
        assert!(failure.description.contains("at login.rs:10"));
    }

    #[test]
    fn test_failure_inside_concept() {
        let concept = ProtoItem {
            item_type: ItemType::Concept.into(),
            concept: Some(ProtoConcept {
                steps: vec![passing_step("a"), failing_step("b", "boom")],
                ..Default::default()
            }),
            ..Default::default()
        };
        let scenario = ProtoScenario {
            failed: true,
            scenario_items: vec![concept],
            ..Default::default()
        };

        assert_eq!(scenario_failure(&scenario).unwrap().message, "boom");
    }

    #[test]
    fn test_scenario_hook_failure_comes_first() {
        let scenario = ProtoScenario {
            failed: true,
            pre_hook_failure: Some(ProtoHookFailure {
                error_message: "db down".to_string(),
                ..Default::default()
            }),
            scenario_items: vec![failing_step("Log in", "Element not found")],
            ..Default::default()
        };

        let failure = scenario_failure(&scenario).unwrap();

        assert_eq!(failure.ty, HOOK_FAILURE);
        assert_eq!(failure.message, "Before Scenario failed: db down");
    }

    #[test]
    fn test_suite_name_falls_back_to_file_name() {
        let spec_result = ProtoSpecResult {
            proto_spec: Some(ProtoSpec {
                file_name: "specs/login.spec".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(suite_name(&spec_result), "specs/login.spec");
    }

    #[test]
    fn test_negative_time_is_zero() {
        assert_eq!(millis(-5), Duration::ZERO);
        assert_eq!(millis(1500), Duration::from_millis(1500));
    }
}
