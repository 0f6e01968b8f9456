use crate::errors::RecallResult;
use crate::memory::{Confidence, MemoryRecord};

/// Narrow read/write contract with the external memory store.
pub trait IMemoryStore: Send + Sync {
    fn read(&self, memory_id: &str) -> RecallResult<MemoryRecord>;

    /// Persist a new confidence. The value is already clamped.
    fn update_confidence(&self, memory_id: &str, confidence: Confidence) -> RecallResult<()>;
}
