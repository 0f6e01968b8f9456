use serde::{Deserialize, Serialize};

use super::defaults;

/// Trace-to-action correlation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Causality window: actions at or beyond this many seconds after a
    /// search are not attributed to it.
    pub window_secs: f64,
    /// Patterns below this effectiveness are dropped.
    pub min_effectiveness: f64,
    /// Search results scoring above this count toward the confidence bonus.
    pub high_confidence_score: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            window_secs: defaults::DEFAULT_CAUSALITY_WINDOW_SECS,
            min_effectiveness: defaults::DEFAULT_MIN_EFFECTIVENESS,
            high_confidence_score: defaults::DEFAULT_HIGH_CONFIDENCE_SCORE,
        }
    }
}
