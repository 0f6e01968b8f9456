use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Temporal decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Per-type decay rate overrides (weight lost per day). Key is the memory
    /// type name. Merged over the built-in rate table.
    pub rate_overrides: HashMap<String, f64>,
    /// Rate used for types present in neither the overrides nor the table.
    pub default_rate: f64,
    /// Absolute lower bound on the temporal weight.
    pub floor: f64,
    /// Multiplier applied to the floored weight of superseded memories.
    pub supersession_multiplier: f64,
    /// Age (days) at which a memory is flagged historical.
    pub historical_threshold_days: i64,
}

impl DecayConfig {
    /// Effective rate table: built-in defaults with overrides applied.
    pub fn rate_table(&self) -> HashMap<String, f64> {
        let mut table: HashMap<String, f64> = defaults::DEFAULT_TYPE_RATES
            .iter()
            .map(|(name, rate)| (name.to_string(), *rate))
            .collect();
        for (name, rate) in &self.rate_overrides {
            table.insert(name.to_lowercase(), *rate);
        }
        table
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            rate_overrides: HashMap::new(),
            default_rate: defaults::DEFAULT_DECAY_RATE,
            floor: defaults::DEFAULT_DECAY_FLOOR,
            supersession_multiplier: defaults::DEFAULT_SUPERSESSION_MULTIPLIER,
            historical_threshold_days: defaults::DEFAULT_HISTORICAL_THRESHOLD_DAYS,
        }
    }
}
