//! Span definitions per operation: extraction, correlation, tracking, decay, dataset.

/// Create an extraction span.
#[macro_export]
macro_rules! extraction_span {
    ($hours_back:expr, $trace_limit:expr) => {
        tracing::info_span!(
            "recall.extraction",
            hours_back = $hours_back,
            trace_limit = $trace_limit
        )
    };
}

/// Create a per-trace correlation span.
#[macro_export]
macro_rules! correlation_span {
    ($trace_id:expr) => {
        tracing::debug_span!("recall.correlation", trace_id = %$trace_id)
    };
}

/// Create an application tracking span.
#[macro_export]
macro_rules! tracking_span {
    ($event_id:expr, $memory_id:expr) => {
        tracing::info_span!("recall.tracking", event_id = %$event_id, memory_id = %$memory_id)
    };
}

/// Create a decay span.
#[macro_export]
macro_rules! decay_span {
    ($memory_count:expr) => {
        tracing::info_span!("recall.decay", memory_count = $memory_count)
    };
}

/// Create a dataset export span.
#[macro_export]
macro_rules! dataset_span {
    ($name:expr) => {
        tracing::info_span!("recall.dataset", dataset = %$name)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EXTRACTION: &str = "recall.extraction";
    pub const CORRELATION: &str = "recall.correlation";
    pub const TRACKING: &str = "recall.tracking";
    pub const DECAY: &str = "recall.decay";
    pub const DATASET: &str = "recall.dataset";
}
