use crate::models::{PatternSet, TraceObservation};

/// Memory-search → action correlation over one trace.
pub trait IPatternCorrelator: Send + Sync {
    /// Must be deterministic for a given observation sequence.
    fn correlate(
        &self,
        trace_id: &str,
        observations: &[TraceObservation],
        min_effectiveness: f64,
    ) -> PatternSet;
}
