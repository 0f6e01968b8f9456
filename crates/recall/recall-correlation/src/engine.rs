//! PatternCorrelator: pairs memory searches with the successful actions
//! that follow them inside the causality window.

use recall_core::config::{defaults, CorrelationConfig};
use recall_core::models::{Pattern, PatternSet, TraceObservation};
use recall_core::traits::IPatternCorrelator;

use crate::classify::{self, ClassifiedObservation};
use crate::{cross_domain, effectiveness};

/// Deterministic search → action correlator.
#[derive(Debug, Clone)]
pub struct PatternCorrelator {
    window_secs: f64,
    high_confidence_score: f64,
}

impl PatternCorrelator {
    pub fn new() -> Self {
        Self {
            window_secs: defaults::DEFAULT_CAUSALITY_WINDOW_SECS,
            high_confidence_score: defaults::DEFAULT_HIGH_CONFIDENCE_SCORE,
        }
    }

    pub fn from_config(config: &CorrelationConfig) -> Self {
        Self {
            window_secs: config.window_secs,
            high_confidence_score: config.high_confidence_score,
        }
    }

    pub fn window_secs(&self) -> f64 {
        self.window_secs
    }

    /// Correlate observations that were already classified.
    ///
    /// Pairs are emitted in (search order, action order). An action must be
    /// strictly later than the search, strictly inside the window, and
    /// successful.
    pub fn correlate_classified(
        &self,
        trace_id: &str,
        observations: &[ClassifiedObservation],
        min_effectiveness: f64,
    ) -> PatternSet {
        let mut set = PatternSet::new();

        let searches = observations
            .iter()
            .filter_map(|o| o.search.as_ref().map(|s| (o.timestamp, s)));
        let actions: Vec<_> = observations
            .iter()
            .filter_map(|o| o.action.map(|a| (o.timestamp, a)))
            .collect();

        let mut candidates = 0usize;
        for (searched_at, search) in searches {
            let high_confidence =
                effectiveness::high_confidence_results(&search.results, self.high_confidence_score);

            for (acted_at, action) in &actions {
                if *acted_at <= searched_at {
                    continue;
                }
                let delta = effectiveness::seconds_between(searched_at, *acted_at);
                if delta >= self.window_secs || !action.success {
                    continue;
                }
                candidates += 1;

                let score = effectiveness::score(action.success, delta, high_confidence);
                if score < min_effectiveness {
                    continue;
                }
                set.push(Pattern {
                    memory_query: search.query.clone(),
                    memory_type: search.search_type.clone(),
                    action_type: action.kind,
                    time_to_action: delta,
                    effectiveness: score,
                    trace_id: trace_id.to_string(),
                });
            }
        }

        if let Some(insight) = cross_domain::detect(trace_id, observations) {
            set.push_insight(insight);
        }

        tracing::debug!(
            trace_id,
            observations = observations.len(),
            candidates,
            patterns = set.pattern_count(),
            cross_domain = !set.cross_domain_insights.is_empty(),
            "correlated trace"
        );

        set
    }
}

impl Default for PatternCorrelator {
    fn default() -> Self {
        Self::new()
    }
}

impl IPatternCorrelator for PatternCorrelator {
    fn correlate(
        &self,
        trace_id: &str,
        observations: &[TraceObservation],
        min_effectiveness: f64,
    ) -> PatternSet {
        let classified = classify::classify_all(observations);
        self.correlate_classified(trace_id, &classified, min_effectiveness)
    }
}
