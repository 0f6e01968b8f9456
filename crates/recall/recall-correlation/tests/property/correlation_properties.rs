use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use recall_core::models::TraceObservation;
use recall_core::traits::IPatternCorrelator;
use recall_correlation::effectiveness;
use recall_correlation::PatternCorrelator;
use serde_json::json;

#[derive(Debug, Clone)]
enum Step {
    Search(f64),
    Command(bool),
    Task(bool),
    Noise,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0.0f64..=1.0).prop_map(Step::Search),
        any::<bool>().prop_map(Step::Command),
        any::<bool>().prop_map(Step::Task),
        Just(Step::Noise),
    ]
}

fn trace(steps: &[(Step, i64)]) -> Vec<TraceObservation> {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    steps
        .iter()
        .enumerate()
        .map(|(i, (step, offset))| {
            let obs = TraceObservation::new(format!("o{i}"), start + Duration::seconds(*offset));
            match step {
                Step::Search(score) => obs
                    .with_metadata("memory_operation", "search")
                    .with_input("q")
                    .with_output(json!([{ "score": score }])),
                Step::Command(ok) => obs.with_metadata("command_executed", *ok),
                Step::Task(ok) => obs.with_metadata("task_completed", *ok),
                Step::Noise => obs.with_metadata("note", "idle"),
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn patterns_respect_window_and_bounds(
        steps in proptest::collection::vec((step(), 0i64..900), 0..24),
        min in 0.0f64..=1.0,
    ) {
        let observations = trace(&steps);
        let set = PatternCorrelator::new().correlate("t", &observations, min);
        for p in set.patterns() {
            prop_assert!(p.time_to_action > 0.0);
            prop_assert!(p.time_to_action < 300.0);
            prop_assert!((0.0..=1.0).contains(&p.effectiveness));
            prop_assert!(p.effectiveness >= min);
        }
    }

    #[test]
    fn score_is_unit_bounded(success in any::<bool>(), delta in 0.0f64..10_000.0, high in 0usize..50) {
        let s = effectiveness::score(success, delta, high);
        prop_assert!((0.0..=1.0).contains(&s));
    }
}
