use std::collections::HashMap;

use recall_core::config::DecayConfig;
use recall_core::memory::MemoryType;

/// Decay rate per memory type, with a fallback for unlisted types.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, f64>,
    default_rate: f64,
}

impl RateTable {
    pub fn from_config(config: &DecayConfig) -> Self {
        Self {
            rates: config.rate_table(),
            default_rate: config.default_rate,
        }
    }

    /// Rate for a type; unlisted types get the default rate.
    pub fn rate_for(&self, memory_type: &MemoryType) -> f64 {
        self.rates
            .get(memory_type.name())
            .copied()
            .unwrap_or(self.default_rate)
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::from_config(&DecayConfig::default())
    }
}
