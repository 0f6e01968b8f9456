use chrono::{Duration, TimeZone, Utc};
use recall_core::memory::*;
use recall_core::models::*;

#[test]
fn memory_type_parses_case_insensitively() {
    assert_eq!(MemoryType::parse("Solution"), MemoryType::Solution);
    assert_eq!(MemoryType::parse(" DEBUG "), MemoryType::Debug);
    assert_eq!(
        MemoryType::parse("tdd_cycle"),
        MemoryType::Other("tdd_cycle".into())
    );
}

#[test]
fn memory_type_serializes_as_plain_string() {
    let json = serde_json::to_string(&MemoryType::Principle).unwrap();
    assert_eq!(json, "\"principle\"");
    let other: MemoryType = serde_json::from_str("\"runbook\"").unwrap();
    assert_eq!(other.name(), "runbook");
}

#[test]
fn memory_record_deserializes_without_superseded_flag() {
    let json = r#"{
        "id": "m1",
        "memory_type": "pattern",
        "confidence": 0.8,
        "created_at": "2026-01-01T00:00:00Z"
    }"#;
    let record: MemoryRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.memory_type, MemoryType::Pattern);
    assert!(!record.superseded);
    assert_eq!(record.confidence.value(), 0.8);
}

#[test]
fn age_days_counts_whole_days_and_never_goes_negative() {
    let created = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let record = MemoryRecord::new("m1", MemoryType::Solution, 0.5, created);
    assert_eq!(record.age_days(created + Duration::hours(47)), 1);
    assert_eq!(record.age_days(created + Duration::days(7)), 7);
    assert_eq!(record.age_days(created - Duration::days(3)), 0);
}

#[test]
fn observation_deserializes_with_missing_optional_fields() {
    let json = r#"{"id": "o1", "timestamp": "2026-01-01T00:00:00Z"}"#;
    let obs: TraceObservation = serde_json::from_str(json).unwrap();
    assert!(obs.metadata.is_empty());
    assert!(obs.input.is_null());
    assert!(obs.output.is_null());
}

#[test]
fn action_kind_pattern_types() {
    assert_eq!(ActionKind::Command.pattern_type(), "memory_to_command");
    assert_eq!(ActionKind::Task.pattern_type(), "memory_to_task");
    assert_eq!(
        ActionKind::ErrorResolution.pattern_type(),
        "memory_to_error_resolution"
    );
}

#[test]
fn pattern_types_list_cross_domain_bucket_last() {
    let mut set = PatternSet::new();
    set.push(Pattern {
        memory_query: "q".into(),
        memory_type: Some("semantic".into()),
        action_type: ActionKind::Task,
        time_to_action: 5.0,
        effectiveness: 0.9,
        trace_id: "t".into(),
    });
    set.push_insight(CrossDomainInsight {
        trace_id: "t".into(),
        gtd_context: PlanningContext::default(),
        coding_context: CodingContext::default(),
        insight: "x".into(),
    });
    assert_eq!(
        set.pattern_types(),
        vec!["memory_to_task".to_string(), "cross_domain_insights".to_string()]
    );
    assert_eq!(set.total(), 2);
    assert_eq!(set.pattern_count(), 1);
}
