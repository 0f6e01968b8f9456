// Single source of truth for all default values.

// --- Decay ---
pub const DEFAULT_DECAY_FLOOR: f64 = 0.1;
pub const DEFAULT_DECAY_RATE: f64 = 0.03;
pub const DEFAULT_SUPERSESSION_MULTIPLIER: f64 = 0.5;
pub const DEFAULT_HISTORICAL_THRESHOLD_DAYS: i64 = 30;

/// Per-type decay rates (fraction of weight lost per day).
pub const DEFAULT_TYPE_RATES: [(&str, f64); 4] = [
    ("solution", 0.03),
    ("pattern", 0.01),
    ("principle", 0.005),
    ("debug", 0.10),
];

// --- Correlation ---
pub const DEFAULT_CAUSALITY_WINDOW_SECS: f64 = 300.0;
pub const DEFAULT_MIN_EFFECTIVENESS: f64 = 0.7;
pub const DEFAULT_HIGH_CONFIDENCE_SCORE: f64 = 0.7;

// --- Extraction ---
pub const DEFAULT_HOURS_BACK: i64 = 24;
pub const DEFAULT_TRACE_LIMIT: usize = 100;
pub const DEFAULT_DATASET_NAME_PREFIX: &str = "memory_eval";
/// Largest accepted look-back (ten years).
pub const MAX_HOURS_BACK: i64 = 87_600;

// --- Tracking ---
pub const DEFAULT_DEDUP_CAPACITY: u64 = 100_000;
pub const DEFAULT_DEDUP_TTL_SECS: u64 = 86_400;

// --- Aggregation ---
pub const DEFAULT_LOW_EFFECTIVENESS: f64 = 0.6;
pub const DEFAULT_HIGH_EFFECTIVENESS: f64 = 0.8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
