use recall_core::memory::Confidence;
use recall_core::models::IndicatorSet;

use crate::weights::{self, UNKNOWN_OUTCOME_CREDIT};

/// Signed delta for one indicator value.
pub fn for_value(indicator: recall_core::models::Indicator, success: bool) -> f64 {
    if success {
        weights::success_delta(indicator)
    } else {
        weights::failure_delta(indicator)
    }
}

/// Sum of deltas over present indicators. With nothing reported the
/// unknown-outcome credit applies instead.
pub fn total(indicators: &IndicatorSet) -> f64 {
    if indicators.is_empty() {
        return UNKNOWN_OUTCOME_CREDIT;
    }
    indicators
        .iter()
        .map(|(indicator, success)| for_value(indicator, success))
        .sum()
}

/// `clamp(confidence + total(indicators), 0, 1)`.
///
/// Not idempotent. Apply exactly once per application event.
pub fn apply(confidence: Confidence, indicators: &IndicatorSet) -> Confidence {
    confidence.adjust(total(indicators))
}
