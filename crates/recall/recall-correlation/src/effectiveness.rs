use chrono::{DateTime, Utc};
use serde_json::Value;

/// Base score for a successful action.
pub const BASE_SUCCESS: f64 = 0.7;
/// Base score for an unsuccessful action.
pub const BASE_FAILURE: f64 = 0.5;
/// Maximum bonus for acting quickly on a search.
pub const TIME_BONUS_MAX: f64 = 0.2;
/// Seconds over which the time bonus decays to zero.
pub const TIME_BONUS_HORIZON_SECS: f64 = 1500.0;
/// Bonus per high-confidence search result.
pub const CONFIDENCE_BONUS_STEP: f64 = 0.1;
pub const CONFIDENCE_BONUS_CAP: f64 = 0.2;

/// Seconds from `from` to `to`, with sub-second precision.
pub fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_seconds() as f64,
    }
}

/// `max(0, 0.2 - delta / 1500)`.
pub fn time_bonus(delta_secs: f64) -> f64 {
    (TIME_BONUS_MAX - delta_secs / TIME_BONUS_HORIZON_SECS).max(0.0)
}

/// Number of search results whose `score` exceeds `threshold`.
///
/// Results that are not a list, or entries without a numeric score,
/// contribute nothing.
pub fn high_confidence_results(results: &Value, threshold: f64) -> usize {
    let Value::Array(items) = results else {
        return 0;
    };
    items
        .iter()
        .filter_map(|item| item.get("score").and_then(Value::as_f64))
        .filter(|score| *score > threshold)
        .count()
}

/// `min(0.2, 0.1 · high_confidence_count)`.
pub fn confidence_bonus(high_confidence_count: usize) -> f64 {
    (CONFIDENCE_BONUS_STEP * high_confidence_count as f64).min(CONFIDENCE_BONUS_CAP)
}

/// Effectiveness of a (search, action) pair, clamped to [0, 1].
pub fn score(success: bool, delta_secs: f64, high_confidence_count: usize) -> f64 {
    let base = if success { BASE_SUCCESS } else { BASE_FAILURE };
    (base + time_bonus(delta_secs) + confidence_bonus(high_confidence_count)).clamp(0.0, 1.0)
}
