//! Per-prompt effectiveness aggregation.
//!
//! A prompt whose mean pattern effectiveness is low gets a revise
//! suggestion; one whose mean is high is flagged as a template.

use std::collections::BTreeMap;

use recall_core::config::{defaults, AggregationConfig};
use recall_core::models::PatternSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Revise,
    HighPerformer,
}

impl RecommendationKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::Revise => "Consider revising - low effectiveness",
            Self::HighPerformer => "High performer - use as template",
        }
    }
}

/// A suggestion about one search prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementSuggestion {
    pub prompt: String,
    pub current_effectiveness: f64,
    pub kind: RecommendationKind,
    pub recommendation: String,
    pub sample_size: usize,
}

#[derive(Debug, Clone)]
pub struct EffectivenessAggregator {
    low_threshold: f64,
    high_threshold: f64,
}

impl EffectivenessAggregator {
    pub fn new() -> Self {
        Self {
            low_threshold: defaults::DEFAULT_LOW_EFFECTIVENESS,
            high_threshold: defaults::DEFAULT_HIGH_EFFECTIVENESS,
        }
    }

    pub fn from_config(config: &AggregationConfig) -> Self {
        Self {
            low_threshold: config.low_threshold,
            high_threshold: config.high_threshold,
        }
    }

    /// Classify a mean. Both thresholds are strict.
    pub fn classify(&self, mean: f64) -> Option<RecommendationKind> {
        if mean < self.low_threshold {
            Some(RecommendationKind::Revise)
        } else if mean > self.high_threshold {
            Some(RecommendationKind::HighPerformer)
        } else {
            None
        }
    }

    /// Suggestions for every prompt whose mean falls outside the band.
    /// Prompts with no samples are skipped. Output follows prompt name order.
    pub fn aggregate(&self, samples: &BTreeMap<String, Vec<f64>>) -> Vec<ImprovementSuggestion> {
        samples
            .iter()
            .filter(|(_, scores)| !scores.is_empty())
            .filter_map(|(prompt, scores)| {
                let mean = mean(scores);
                let kind = self.classify(mean)?;
                tracing::debug!(prompt = %prompt, mean, samples = scores.len(), ?kind, "prompt flagged");
                Some(ImprovementSuggestion {
                    prompt: prompt.clone(),
                    current_effectiveness: mean,
                    kind,
                    recommendation: kind.message().to_string(),
                    sample_size: scores.len(),
                })
            })
            .collect()
    }

    pub fn aggregate_patterns(&self, patterns: &PatternSet) -> Vec<ImprovementSuggestion> {
        self.aggregate(&patterns.effectiveness_by_prompt())
    }
}

impl Default for EffectivenessAggregator {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
