use chrono::{DateTime, Utc};

use crate::memory::MemoryRecord;
use crate::models::TemporalAssessment;

/// Read-time temporal relevance.
pub trait ITemporalDecay: Send + Sync {
    /// Assess a memory's relevance as of `now`.
    fn assess(&self, memory: &MemoryRecord, now: DateTime<Utc>) -> TemporalAssessment;
}
