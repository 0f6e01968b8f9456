//! Golden trace scenarios loaded from `test-fixtures/golden/traces`.

use std::collections::BTreeMap;

use recall_core::models::TraceObservation;
use recall_core::traits::IPatternCorrelator;
use recall_correlation::PatternCorrelator;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ExpectedPattern {
    time_to_action: f64,
    effectiveness: f64,
}

#[derive(Debug, Deserialize)]
struct ExpectedInsight {
    task: Option<serde_json::Value>,
    language: Option<serde_json::Value>,
    insight: String,
}

#[derive(Debug, Deserialize)]
struct Expected {
    #[serde(default)]
    patterns: BTreeMap<String, Vec<ExpectedPattern>>,
    #[serde(default)]
    cross_domain: Option<ExpectedInsight>,
}

#[derive(Debug, Deserialize)]
struct TraceScenario {
    description: String,
    trace_id: String,
    min_effectiveness: f64,
    observations: Vec<TraceObservation>,
    expected: Expected,
}

fn run(relative_path: &str) {
    let scenario: TraceScenario = test_fixtures::load_fixture(relative_path);
    let set = PatternCorrelator::new().correlate(
        &scenario.trace_id,
        &scenario.observations,
        scenario.min_effectiveness,
    );

    let expected_count: usize = scenario.expected.patterns.values().map(Vec::len).sum();
    assert_eq!(
        set.pattern_count(),
        expected_count,
        "{}: pattern count",
        scenario.description
    );

    for (pattern_type, expected) in &scenario.expected.patterns {
        let actual = set.get(pattern_type);
        assert_eq!(actual.len(), expected.len(), "{}: {pattern_type}", scenario.description);
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (a.time_to_action - e.time_to_action).abs() < 1e-6,
                "{}: time_to_action {} != {}",
                scenario.description,
                a.time_to_action,
                e.time_to_action
            );
            assert!(
                (a.effectiveness - e.effectiveness).abs() < 1e-4,
                "{}: effectiveness {} != {}",
                scenario.description,
                a.effectiveness,
                e.effectiveness
            );
            assert_eq!(a.trace_id, scenario.trace_id);
        }
    }

    match &scenario.expected.cross_domain {
        Some(expected) => {
            assert_eq!(set.cross_domain_insights.len(), 1, "{}", scenario.description);
            let insight = &set.cross_domain_insights[0];
            assert_eq!(insight.gtd_context.task, expected.task);
            assert_eq!(insight.coding_context.language, expected.language);
            assert_eq!(insight.insight, expected.insight);
        }
        None => assert!(set.cross_domain_insights.is_empty(), "{}", scenario.description),
    }
}

#[test]
fn golden_search_then_command() {
    run("golden/traces/search_then_command.json");
}

#[test]
fn golden_action_outside_window() {
    run("golden/traces/action_outside_window.json");
}

#[test]
fn golden_failed_action() {
    run("golden/traces/failed_action.json");
}

#[test]
fn golden_high_confidence_results() {
    run("golden/traces/high_confidence_results.json");
}

#[test]
fn golden_cross_domain_insight() {
    run("golden/traces/cross_domain_insight.json");
}

#[test]
fn golden_mixed_actions() {
    run("golden/traces/mixed_actions.json");
}

#[test]
fn every_golden_trace_parses() {
    let files = test_fixtures::list_fixtures("golden/traces");
    assert_eq!(files.len(), 6);
    for file in files {
        let content = std::fs::read_to_string(&file).unwrap();
        let _: TraceScenario = serde_json::from_str(&content).unwrap();
    }
}
