mod config_error;
mod dataset_error;
mod memory_store_error;
mod trace_source_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use memory_store_error::MemoryStoreError;
pub use trace_source_error::TraceSourceError;

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum RecallError {
    #[error("trace source error: {0}")]
    TraceSource(#[from] TraceSourceError),

    #[error("memory store error: {0}")]
    MemoryStore(#[from] MemoryStoreError),

    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("no dataset sink configured")]
    DatasetSinkMissing,
}

/// Convenience alias used across the workspace.
pub type RecallResult<T> = Result<T, RecallError>;
