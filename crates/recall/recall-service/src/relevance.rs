use chrono::{DateTime, Utc};
use recall_core::errors::RecallResult;
use recall_core::models::TemporalAssessment;

use crate::engine::RecallEngine;

impl RecallEngine {
    /// Read-time relevance of one stored memory. Nothing is written back.
    pub fn current_relevance(
        &self,
        memory_id: &str,
        now: DateTime<Utc>,
    ) -> RecallResult<TemporalAssessment> {
        let record = self.memories.read(memory_id)?;
        Ok(self.decay.assess(&record, now))
    }

    /// Relevance for several memories, in input order. Stops at the first
    /// failed read.
    pub fn relevance_batch(
        &self,
        memory_ids: &[&str],
        now: DateTime<Utc>,
    ) -> RecallResult<Vec<TemporalAssessment>> {
        let _span = recall_observability::decay_span!(memory_ids.len()).entered();
        memory_ids
            .iter()
            .map(|id| self.current_relevance(id, now))
            .collect()
    }
}
