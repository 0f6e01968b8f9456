//! Success-pattern extraction over recent traces.

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use recall_core::errors::{ConfigError, RecallResult};
use recall_core::models::PatternSet;
use recall_observability::tracing_setup::events;

use crate::engine::RecallEngine;

impl RecallEngine {
    /// Correlate every trace started in the last `hours_back` hours.
    ///
    /// At most `extraction.trace_limit` traces are fetched. Traces are
    /// correlated in parallel and merged in the order the source returned
    /// them, so the result does not depend on scheduling. The first
    /// collaborator error aborts the run.
    pub fn extract_success_patterns(
        &self,
        now: DateTime<Utc>,
        hours_back: i64,
        min_effectiveness: f64,
    ) -> RecallResult<PatternSet> {
        if hours_back <= 0 {
            return Err(ConfigError::ValidationFailed {
                field: "hours_back".into(),
                message: format!("must be positive, got {hours_back}"),
            }
            .into());
        }
        let since = Duration::try_hours(hours_back)
            .and_then(|back| now.checked_sub_signed(back))
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "hours_back".into(),
                message: format!("look-back of {hours_back} hours is out of range"),
            })?;
        let limit = self.config.extraction.trace_limit;
        let _span = recall_observability::extraction_span!(hours_back, limit).entered();

        let traces = self.traces.fetch_traces(since, limit)?;

        let per_trace: Vec<PatternSet> = traces
            .par_iter()
            .map(|trace| {
                let _span = recall_observability::correlation_span!(trace.id).entered();
                let observations = self.traces.fetch_observations(&trace.id)?;
                Ok(self
                    .correlator
                    .correlate(&trace.id, &observations, min_effectiveness))
            })
            .collect::<RecallResult<Vec<_>>>()?;

        let mut patterns = PatternSet::new();
        for set in per_trace {
            patterns.merge(set);
        }

        events::pattern_extracted(
            traces.len(),
            patterns.pattern_count(),
            patterns.cross_domain_insights.len(),
        );
        Ok(patterns)
    }

    /// [`extract_success_patterns`](Self::extract_success_patterns) with the
    /// configured look-back and threshold.
    pub fn extract_with_defaults(&self, now: DateTime<Utc>) -> RecallResult<PatternSet> {
        self.extract_success_patterns(
            now,
            self.config.extraction.hours_back,
            self.config.correlation.min_effectiveness,
        )
    }
}
