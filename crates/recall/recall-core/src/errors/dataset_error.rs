/// Evaluation dataset sink errors.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset creation failed: {name}: {reason}")]
    CreateFailed { name: String, reason: String },

    #[error("row rejected by dataset {name}: {reason}")]
    RowRejected { name: String, reason: String },
}
