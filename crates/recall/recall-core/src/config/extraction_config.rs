use serde::{Deserialize, Serialize};

use super::defaults;

/// Pattern extraction pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How far back to look for traces (hours).
    pub hours_back: i64,
    /// Maximum number of traces fetched per extraction run.
    pub trace_limit: usize,
    /// Prefix for generated evaluation dataset names.
    pub dataset_name_prefix: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            hours_back: defaults::DEFAULT_HOURS_BACK,
            trace_limit: defaults::DEFAULT_TRACE_LIMIT,
            dataset_name_prefix: defaults::DEFAULT_DATASET_NAME_PREFIX.to_string(),
        }
    }
}
