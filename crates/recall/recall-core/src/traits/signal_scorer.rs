use crate::memory::Confidence;
use crate::models::IndicatorSet;

/// Implicit-signal scoring.
pub trait ISignalScorer: Send + Sync {
    /// One-shot effectiveness in [0.0, 1.0]; 0.5 with no evidence.
    fn effectiveness(&self, indicators: &IndicatorSet) -> f64;

    /// Incremental confidence update. Not idempotent: call once per event.
    fn apply_delta(&self, confidence: Confidence, indicators: &IndicatorSet) -> Confidence;
}
