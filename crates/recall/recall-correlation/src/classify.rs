//! Ingestion-time classification of raw trace observations.
//!
//! This is the only place that inspects the free-form metadata bag.

use chrono::{DateTime, Utc};
use recall_core::constants::{
    MEMORY_OPERATION_SEARCH, META_COMMAND_EXECUTED, META_ERROR_RESOLVED, META_MEMORY_OPERATION,
    META_SEARCH_TYPE, META_TASK_COMPLETED,
};
use recall_core::models::{truthy, ActionKind, TraceObservation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Action markers in precedence order. The first non-null one wins.
const ACTION_MARKERS: [(&str, ActionKind); 3] = [
    (META_COMMAND_EXECUTED, ActionKind::Command),
    (META_TASK_COMPLETED, ActionKind::Task),
    (META_ERROR_RESOLVED, ActionKind::ErrorResolution),
];

/// A memory search recorded on an observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySearch {
    pub query: Value,
    pub search_type: Option<String>,
    pub results: Value,
}

/// A terminal action recorded on an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedAction {
    pub kind: ActionKind,
    pub success: bool,
}

/// Keyword flags over the lowercased serialized metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSignals {
    /// Mentions `gtd` or `task`.
    pub planning: bool,
    /// Mentions `gtd`. Source of the planning context.
    pub gtd: bool,
    /// Mentions `code` or `debug`.
    pub coding: bool,
    /// Mentions `code`, `error` or `debug`. Source of the coding context.
    pub technical: bool,
}

impl DomainSignals {
    pub fn from_metadata(metadata: &Map<String, Value>) -> Self {
        if metadata.is_empty() {
            return Self::default();
        }
        let text = serde_json::to_string(metadata)
            .unwrap_or_default()
            .to_lowercase();
        let has = |needle: &str| text.contains(needle);
        Self {
            planning: has("gtd") || has("task"),
            gtd: has("gtd"),
            coding: has("code") || has("debug"),
            technical: has("code") || has("error") || has("debug"),
        }
    }
}

/// A trace observation after ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedObservation {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub search: Option<MemorySearch>,
    pub action: Option<ObservedAction>,
    pub domains: DomainSignals,
    pub metadata: Map<String, Value>,
    pub output: Value,
}

impl ClassifiedObservation {
    pub fn metadata_value(&self, key: &str) -> Option<Value> {
        self.metadata.get(key).filter(|v| !v.is_null()).cloned()
    }
}

/// Classify one observation. An observation may be both a search and an
/// action.
pub fn classify(observation: &TraceObservation) -> ClassifiedObservation {
    let metadata = &observation.metadata;

    let search = match metadata.get(META_MEMORY_OPERATION) {
        Some(Value::String(op)) if op == MEMORY_OPERATION_SEARCH => Some(MemorySearch {
            query: observation.input.clone(),
            search_type: metadata.get(META_SEARCH_TYPE).and_then(search_type_name),
            results: observation.output.clone(),
        }),
        _ => None,
    };

    let action = ACTION_MARKERS.iter().find_map(|(key, kind)| {
        metadata
            .get(*key)
            .filter(|v| !v.is_null())
            .map(|v| ObservedAction {
                kind: *kind,
                success: truthy(v),
            })
    });

    ClassifiedObservation {
        id: observation.id.clone(),
        timestamp: observation.timestamp,
        search,
        action,
        domains: DomainSignals::from_metadata(metadata),
        metadata: metadata.clone(),
        output: observation.output.clone(),
    }
}

pub fn classify_all(observations: &[TraceObservation]) -> Vec<ClassifiedObservation> {
    observations.iter().map(classify).collect()
}

fn search_type_name(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
