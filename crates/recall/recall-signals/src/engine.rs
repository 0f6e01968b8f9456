//! SignalScorer: groups the weighted and delta forms behind `ISignalScorer`.

use recall_core::memory::Confidence;
use recall_core::models::{ActionOutcome, IndicatorSet};
use recall_core::traits::ISignalScorer;
use serde::{Deserialize, Serialize};

use crate::{delta, weighted};

/// Result of scoring one application outcome against a memory's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalEvaluation {
    /// Weighted-average effectiveness in [0, 1].
    pub effectiveness: f64,
    /// Raw signed delta before clamping.
    pub delta: f64,
    pub previous_confidence: Confidence,
    pub new_confidence: Confidence,
}

/// Stateless scorer for implicit outcome signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalScorer;

impl SignalScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score an outcome and compute the updated confidence in one pass.
    pub fn evaluate(&self, confidence: Confidence, indicators: &IndicatorSet) -> SignalEvaluation {
        let effectiveness = weighted::score(indicators);
        let delta = delta::total(indicators);
        let new_confidence = confidence.adjust(delta);

        tracing::debug!(
            indicators = indicators.len(),
            effectiveness,
            delta,
            previous = confidence.value(),
            updated = new_confidence.value(),
            "scored application outcome"
        );

        SignalEvaluation {
            effectiveness,
            delta,
            previous_confidence: confidence,
            new_confidence,
        }
    }

    pub fn evaluate_outcome(
        &self,
        confidence: Confidence,
        outcome: &ActionOutcome,
    ) -> (IndicatorSet, SignalEvaluation) {
        let indicators = IndicatorSet::from(outcome);
        let evaluation = self.evaluate(confidence, &indicators);
        (indicators, evaluation)
    }
}

impl ISignalScorer for SignalScorer {
    fn effectiveness(&self, indicators: &IndicatorSet) -> f64 {
        weighted::score(indicators)
    }

    fn apply_delta(&self, confidence: Confidence, indicators: &IndicatorSet) -> Confidence {
        delta::apply(confidence, indicators)
    }
}
