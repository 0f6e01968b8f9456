//! Indicator extraction from loosely-typed JSON outcome objects.

use recall_core::models::{truthy, Indicator, IndicatorSet};
use serde_json::{Map, Value};

/// Build an indicator set from an outcome object.
///
/// Unrecognized keys are ignored. A `null` value counts as absent.
pub fn from_json(outcome: &Map<String, Value>) -> IndicatorSet {
    let mut set = IndicatorSet::new();
    for (key, value) in outcome {
        let Some(indicator) = Indicator::from_key(key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        set.set(indicator, Some(truthy(value)));
    }
    set
}

/// Like [`from_json`] but accepts any value; non-objects yield an empty set.
pub fn from_value(outcome: &Value) -> IndicatorSet {
    match outcome {
        Value::Object(map) => from_json(map),
        _ => IndicatorSet::new(),
    }
}
