use serde::{Deserialize, Serialize};

/// Observed result of acting on a memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionOutcome {
    /// Process exit code, when a command was run.
    pub exit_code: Option<i32>,
    pub tests_passed: Option<bool>,
    pub task_completed: Option<bool>,
    pub error_resolved: Option<bool>,
    pub file_modified: Option<bool>,
}

/// A memory was applied and something happened.
///
/// `event_id` is the idempotency key: the same application delivered twice
/// carries the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationEvent {
    pub event_id: String,
    pub memory_id: String,
    pub action_taken: String,
    pub outcome: ActionOutcome,
}
