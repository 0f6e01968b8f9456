/// Memory store collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("memory not found: {id}")]
    MemoryNotFound { id: String },

    #[error("confidence write rejected for {id}: {reason}")]
    WriteRejected { id: String, reason: String },

    #[error("memory store unavailable: {reason}")]
    Unavailable { reason: String },
}
