//! Layered configuration: compiled defaults → TOML file → `RECALL_*` environment.

pub mod aggregation_config;
pub mod correlation_config;
pub mod decay_config;
pub mod defaults;
pub mod extraction_config;
pub mod observability_config;
pub mod tracking_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use aggregation_config::AggregationConfig;
pub use correlation_config::CorrelationConfig;
pub use decay_config::DecayConfig;
pub use extraction_config::ExtractionConfig;
pub use observability_config::ObservabilityConfig;
pub use tracking_config::TrackingConfig;

use crate::errors::ConfigError;

/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "RECALL_LOG_LEVEL";
/// Environment variable overriding `correlation.min_effectiveness`.
pub const ENV_MIN_EFFECTIVENESS: &str = "RECALL_MIN_EFFECTIVENESS";
/// Environment variable overriding `extraction.hours_back`.
pub const ENV_HOURS_BACK: &str = "RECALL_HOURS_BACK";

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    pub decay: DecayConfig,
    pub correlation: CorrelationConfig,
    pub extraction: ExtractionConfig,
    pub aggregation: AggregationConfig,
    pub tracking: TrackingConfig,
    pub observability: ObservabilityConfig,
}

impl RecallConfig {
    /// Parse configuration from a TOML string. Missing keys keep defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply `RECALL_*` environment
    /// overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using the given lookup.
    ///
    /// The lookup is injected so tests never touch the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = level;
        }
        if let Some(raw) = lookup(ENV_MIN_EFFECTIVENESS) {
            self.correlation.min_effectiveness = raw.trim().parse().map_err(|_| {
                ConfigError::ValidationFailed {
                    field: ENV_MIN_EFFECTIVENESS.to_string(),
                    message: format!("not a number: {raw}"),
                }
            })?;
        }
        if let Some(raw) = lookup(ENV_HOURS_BACK) {
            self.extraction.hours_back = raw.trim().parse().map_err(|_| {
                ConfigError::ValidationFailed {
                    field: ENV_HOURS_BACK.to_string(),
                    message: format!("not an integer: {raw}"),
                }
            })?;
        }
        Ok(())
    }

    /// Validate value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = |field: &str, value: f64| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                })
            }
        };

        for (name, rate) in &self.decay.rate_overrides {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("decay.rate_overrides.{name}"),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        if !self.decay.default_rate.is_finite() || self.decay.default_rate < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "decay.default_rate".to_string(),
                message: "must be a non-negative number".to_string(),
            });
        }
        unit("decay.floor", self.decay.floor)?;
        unit("decay.supersession_multiplier", self.decay.supersession_multiplier)?;
        if self.decay.historical_threshold_days < 0 {
            return Err(ConfigError::ValidationFailed {
                field: "decay.historical_threshold_days".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if !self.correlation.window_secs.is_finite() || self.correlation.window_secs <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "correlation.window_secs".to_string(),
                message: "must be a finite number greater than 0".to_string(),
            });
        }
        unit("correlation.min_effectiveness", self.correlation.min_effectiveness)?;
        unit(
            "correlation.high_confidence_score",
            self.correlation.high_confidence_score,
        )?;

        if !(1..=defaults::MAX_HOURS_BACK).contains(&self.extraction.hours_back) {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.hours_back".to_string(),
                message: format!("must be between 1 and {}", defaults::MAX_HOURS_BACK),
            });
        }
        if self.extraction.trace_limit == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.trace_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.tracking.dedup_capacity == 0 || self.tracking.dedup_ttl_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "tracking".to_string(),
                message: "dedup_capacity and dedup_ttl_secs must be greater than 0".to_string(),
            });
        }

        unit("aggregation.low_threshold", self.aggregation.low_threshold)?;
        unit("aggregation.high_threshold", self.aggregation.high_threshold)?;
        if self.aggregation.low_threshold > self.aggregation.high_threshold {
            return Err(ConfigError::ValidationFailed {
                field: "aggregation".to_string(),
                message: "low_threshold must not exceed high_threshold".to_string(),
            });
        }
        Ok(())
    }
}
