use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recorded execution timeline, as listed by the trace source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Trace {
    pub fn new(id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            timestamp,
            name: None,
        }
    }
}

/// One timestamped event inside a trace.
///
/// `metadata` is the open key/value bag written by instrumented callers.
/// It is interpreted once, at ingestion, by the correlation crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceObservation {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub input: Value,
    #[serde(default)]
    pub output: Value,
}

impl TraceObservation {
    pub fn new(id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            timestamp,
            metadata: Map::new(),
            input: Value::Null,
            output: Value::Null,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_input(mut self, input: impl Into<Value>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<Value>) -> Self {
        self.output = output.into();
        self
    }
}
