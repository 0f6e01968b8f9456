use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lowered;

/// Relevance of a set of retrieved memories to the query that fetched them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalJudgement {
    pub total_memories: usize,
    pub high_confidence: usize,
    pub avg_confidence: f64,
    pub has_exact_match: bool,
    pub relevance_score: f64,
}

/// `0.4·exact + min(0.3, avg·0.3) + min(0.3, high/10·0.3)`.
///
/// A memory without a numeric `score` counts as 0. The exact-match check is
/// a case-insensitive substring test of the query against each memory.
pub fn judge(query: &str, memories: &[Value], high_confidence_score: f64) -> RetrievalJudgement {
    let scores: Vec<f64> = memories
        .iter()
        .map(|m| m.get("score").and_then(Value::as_f64).unwrap_or(0.0))
        .collect();
    let high_confidence = scores.iter().filter(|s| **s > high_confidence_score).count();
    let avg_confidence = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };
    let needle = query.to_lowercase();
    let has_exact_match = memories.iter().any(|m| lowered(m).contains(&needle));

    let mut relevance_score = 0.0;
    if has_exact_match {
        relevance_score += 0.4;
    }
    relevance_score += (avg_confidence * 0.3).min(0.3);
    relevance_score += (high_confidence as f64 / 10.0 * 0.3).min(0.3);

    RetrievalJudgement {
        total_memories: memories.len(),
        high_confidence,
        avg_confidence,
        has_exact_match,
        relevance_score,
    }
}
