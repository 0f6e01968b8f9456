use serde::{Deserialize, Serialize};

use super::defaults;

/// Prompt effectiveness aggregation thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Mean effectiveness strictly below this is flagged for revision.
    pub low_threshold: f64,
    /// Mean effectiveness strictly above this is flagged as a template.
    pub high_threshold: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            low_threshold: defaults::DEFAULT_LOW_EFFECTIVENESS,
            high_threshold: defaults::DEFAULT_HIGH_EFFECTIVENESS,
        }
    }
}
