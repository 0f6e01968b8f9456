/// Default age at which a memory is considered historical.
pub use recall_core::config::defaults::DEFAULT_HISTORICAL_THRESHOLD_DAYS as HISTORICAL_THRESHOLD_DAYS;

/// Common read-time windows (days).
pub const WINDOW_TODAY: i64 = 1;
pub const WINDOW_WEEK: i64 = 7;
pub const WINDOW_MONTH: i64 = 30;

/// Historical memories stay usable but rank lower.
pub fn is_historical(age_days: i64, threshold_days: i64) -> bool {
    age_days >= threshold_days
}

/// Whether a memory of this age falls inside a look-back window.
pub fn within_window(age_days: i64, max_days: i64) -> bool {
    age_days <= max_days
}
