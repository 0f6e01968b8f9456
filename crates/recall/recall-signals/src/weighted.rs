use recall_core::models::IndicatorSet;

use crate::weights::{self, NEUTRAL_SCORE};

/// Weighted-average effectiveness of the present indicators.
///
/// ```text
/// score = Σ weight(i) · [value(i)] / Σ weight(i)     over present i
/// ```
///
/// No present indicator returns the neutral 0.5. A present `false` adds to
/// the denominator only, pulling the score down. The result is in [0, 1]
/// because the numerator never exceeds the denominator.
pub fn score(indicators: &IndicatorSet) -> f64 {
    let mut total_weight = 0.0;
    let mut weighted_sum = 0.0;

    for (indicator, value) in indicators.iter() {
        let w = weights::weight(indicator);
        total_weight += w;
        if value {
            weighted_sum += w;
        }
    }

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        NEUTRAL_SCORE
    }
}
