use recall_core::config::ObservabilityConfig;
use recall_observability::tracing_setup::{events, spans::names};
use recall_observability::{
    correlation_span, dataset_span, decay_span, extraction_span, init_from_config,
    init_tracing, init_tracing_with_filter, tracking_span,
};
use tracing_subscriber::util::TryInitError;

#[test]
fn span_names_are_namespaced() {
    for name in [
        names::EXTRACTION,
        names::CORRELATION,
        names::TRACKING,
        names::DECAY,
        names::DATASET,
    ] {
        assert!(name.starts_with("recall."), "{name}");
    }
}

#[test]
fn spans_and_events_work_with_a_subscriber() {
    // A second install must fail rather than replace the first.
    let _ = init_tracing_with_filter("debug");
    assert!(init_from_config(&ObservabilityConfig::default()).is_err());

    let span = extraction_span!(24_i64, 100_usize);
    let _guard = span.enter();
    let _c = correlation_span!("trace-1").entered();
    let _t = tracking_span!("evt-1", "mem-1").entered();
    let _d = decay_span!(3_usize).entered();
    let _s = dataset_span!("memory_eval").entered();

    events::pattern_extracted(2, 5, 1);
    events::confidence_updated("mem-1", 0.7, 1.0, 0.3);
    events::duplicate_application_skipped("evt-1", "mem-1");
    events::improvement_suggested("memory_search_semantic", "revise", 0.4, 3);
    events::dataset_created("memory_eval", 5);
}

#[test]
fn repeated_install_surfaces_try_init_error() {
    let _ = init_tracing_with_filter("info");
    let second: Result<(), TryInitError> = init_tracing();
    let err = second.unwrap_err();
    assert!(!err.to_string().is_empty());
}
