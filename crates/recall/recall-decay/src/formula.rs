/// Absolute lower bound on a temporal weight.
pub use recall_core::config::defaults::DEFAULT_DECAY_FLOOR as FLOOR;

/// Linear decay with the default floor.
///
/// ```text
/// weight = max(0.1, 1.0 - age_days × decay_rate)
/// ```
///
/// Negative ages (clock skew) count as zero.
pub fn weight(age_days: i64, decay_rate: f64) -> f64 {
    weight_with_floor(age_days, decay_rate, FLOOR)
}

/// Linear decay with an explicit floor.
pub fn weight_with_floor(age_days: i64, decay_rate: f64, floor: f64) -> f64 {
    let age = age_days.max(0) as f64;
    (1.0 - age * decay_rate).max(floor).min(1.0)
}

/// Stored confidence scaled by a temporal weight.
///
/// Outcomes raise confidence; they never touch the weight, so an old memory
/// with a perfect record still ranks low.
pub fn effective_confidence(confidence: f64, weight: f64) -> f64 {
    (confidence * weight).clamp(0.0, 1.0)
}

/// Share of [`ranking_score`] taken by stored confidence.
pub const QUALITY_SHARE: f64 = 0.7;
/// Share of [`ranking_score`] taken by the temporal weight.
pub const RECENCY_SHARE: f64 = 0.3;

/// Additive blend for callers that prefer a well-rated older memory over a
/// weak fresh one: `0.7 × confidence + 0.3 × weight`.
pub fn ranking_score(confidence: f64, weight: f64) -> f64 {
    (QUALITY_SHARE * confidence + RECENCY_SHARE * weight).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_weight_at_age_zero() {
        assert_eq!(weight(0, 0.03), 1.0);
        assert_eq!(weight(0, 0.10), 1.0);
    }

    #[test]
    fn week_old_solution() {
        assert!((weight(7, 0.03) - 0.79).abs() < 1e-9);
    }

    #[test]
    fn month_old_solution_reaches_floor() {
        // 1.0 - 30 × 0.03 is 0.10000000000000009 in f64, just above the floor.
        let month = weight(30, 0.03);
        assert!(month >= FLOOR);
        assert!((month - FLOOR).abs() < 1e-9);
        assert_eq!(weight(90, 0.03), FLOOR);
    }

    #[test]
    fn negative_age_is_fresh() {
        assert_eq!(weight(-5, 0.03), 1.0);
    }

    #[test]
    fn effective_confidence_is_product() {
        assert!((effective_confidence(0.95, 0.1) - 0.095).abs() < 1e-12);
    }

    #[test]
    fn ranking_score_blends_quality_and_recency() {
        assert!((ranking_score(0.95, weight(14, 0.03)) - 0.839).abs() < 1e-9);
        assert!((ranking_score(0.7, weight(7, 0.03)) - 0.727).abs() < 1e-9);
        assert!((ranking_score(0.4, weight(1, 0.03)) - 0.571).abs() < 1e-9);
        assert_eq!(ranking_score(1.0, 1.0), 1.0);
    }
}
