use serde::{Deserialize, Serialize};

/// Read-time relevance of a memory, derived from its age, type and
/// supersession flag. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalAssessment {
    pub memory_id: String,
    pub age_days: i64,
    pub decay_rate: f64,
    /// Floored decay curve value, before supersession.
    pub base_weight: f64,
    /// `base_weight` with the supersession multiplier applied.
    pub effective_weight: f64,
    pub superseded: bool,
    pub historical: bool,
    /// Stored confidence scaled by `effective_weight`.
    pub effective_confidence: f64,
    /// Quality-leaning blend of confidence and `effective_weight`.
    pub ranking_score: f64,
}
