use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ActionKind;

/// One offline-evaluation row derived from a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Content-derived id, stable across re-exports of the same pattern.
    pub id: String,
    pub pattern_type: String,
    pub input: DatasetInput,
    pub expected_output: DatasetExpected,
    pub metadata: DatasetRowMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInput {
    pub query: Value,
    pub context: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetExpected {
    pub action_type: Option<ActionKind>,
    pub effectiveness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRowMetadata {
    pub pattern_type: String,
    pub trace_id: String,
}
