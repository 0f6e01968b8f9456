//! Prompt improvement, dataset export and variant comparison.

use chrono::{DateTime, Utc};
use recall_core::errors::{RecallError, RecallResult};
use recall_core::models::PatternSet;
use recall_evaluation::{compare_variants, dataset, AbTestReport, ImprovementSuggestion, VariantScores};
use recall_observability::tracing_setup::events;
use serde::{Deserialize, Serialize};

use crate::engine::RecallEngine;

/// Outcome of a dataset export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dataset_name: String,
    pub items_created: usize,
    pub pattern_types: Vec<String>,
}

impl RecallEngine {
    pub fn identify_prompt_improvements(&self, patterns: &PatternSet) -> Vec<ImprovementSuggestion> {
        let suggestions = self.aggregator.aggregate_patterns(patterns);
        for s in &suggestions {
            events::improvement_suggested(
                &s.prompt,
                &s.recommendation,
                s.current_effectiveness,
                s.sample_size,
            );
        }
        suggestions
    }

    /// Default dataset name: configured prefix plus the UTC date.
    pub fn default_dataset_name(&self, now: DateTime<Utc>) -> String {
        format!(
            "{}_{}",
            self.config.extraction.dataset_name_prefix,
            now.format("%Y%m%d")
        )
    }

    /// Export one row per pattern and per cross-domain insight.
    ///
    /// Requires a dataset sink. Sink errors propagate; rows written before
    /// a failure stay written.
    pub fn create_evaluation_dataset(
        &self,
        patterns: &PatternSet,
        name: Option<&str>,
        now: DateTime<Utc>,
    ) -> RecallResult<DatasetSummary> {
        let sink = self
            .dataset_sink
            .as_ref()
            .ok_or(RecallError::DatasetSinkMissing)?;
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| self.default_dataset_name(now));
        let _span = recall_observability::dataset_span!(name).entered();

        let rows = dataset::rows(patterns)?;
        sink.create_dataset(
            &name,
            dataset::DATASET_DESCRIPTION,
            &dataset::dataset_metadata(patterns, now),
        )?;
        for row in &rows {
            sink.add_row(&name, row)?;
        }

        events::dataset_created(&name, rows.len());
        Ok(DatasetSummary {
            dataset_name: name,
            items_created: rows.len(),
            pattern_types: patterns.pattern_types(),
        })
    }

    pub fn compare_variants(&self, variants: &[VariantScores]) -> AbTestReport {
        compare_variants(variants)
    }
}
