use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Confidence, MemoryType};

/// A unit of captured knowledge, as handed over by the memory store.
///
/// Temporal weight is not stored. It is derived from `created_at`,
/// `memory_type` and `superseded` at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub id: String,
    pub memory_type: MemoryType,
    pub confidence: Confidence,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub superseded: bool,
}

impl MemoryRecord {
    pub fn new(
        id: impl Into<String>,
        memory_type: MemoryType,
        confidence: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            memory_type,
            confidence: Confidence::new(confidence),
            created_at,
            superseded: false,
        }
    }

    /// Whole days elapsed between creation and `now`; never negative.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days().max(0)
    }
}
