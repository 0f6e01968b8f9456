//! Deterministic heuristic judges.
//!
//! Each judge reduces its inputs to a handful of observable features and a
//! score in [0, 1]. None of them call out to a model.

pub mod cross_domain;
pub mod freshness;
pub mod retrieval;
pub mod solution;

pub use cross_domain::CrossDomainJudgement;
pub use freshness::{FreshnessJudgement, FreshnessRecommendation};
pub use retrieval::RetrievalJudgement;
pub use solution::SolutionJudgement;

use serde_json::Value;

/// Lowercased text form of a JSON value. Strings are taken verbatim.
pub(crate) fn lowered(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_lowercase(),
        other => other.to_string().to_lowercase(),
    }
}
