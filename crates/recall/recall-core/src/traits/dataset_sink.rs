use crate::errors::RecallResult;
use crate::models::DatasetRow;

/// Optional sink for offline-evaluation rows.
pub trait IDatasetSink: Send + Sync {
    /// Create the dataset if it does not exist yet.
    fn create_dataset(
        &self,
        name: &str,
        description: &str,
        metadata: &serde_json::Value,
    ) -> RecallResult<()>;

    fn add_row(&self, dataset_name: &str, row: &DatasetRow) -> RecallResult<()>;
}
