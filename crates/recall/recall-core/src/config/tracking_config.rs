use serde::{Deserialize, Serialize};

use super::defaults;

/// Application tracking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Maximum number of event ids remembered for redelivery detection.
    pub dedup_capacity: u64,
    /// How long an event id is remembered after its first delivery (seconds).
    pub dedup_ttl_secs: u64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            dedup_capacity: defaults::DEFAULT_DEDUP_CAPACITY,
            dedup_ttl_secs: defaults::DEFAULT_DEDUP_TTL_SECS,
        }
    }
}
