//! Evaluation dataset rows built from a pattern set.

use recall_core::constants::CROSS_DOMAIN_BUCKET;
use recall_core::errors::RecallResult;
use recall_core::models::{
    CrossDomainInsight, DatasetExpected, DatasetInput, DatasetRow, DatasetRowMetadata, Pattern,
    PatternSet,
};
use serde_json::{json, Map, Value};

/// Description attached to every generated dataset.
pub const DATASET_DESCRIPTION: &str = "Auto-generated from successful memory patterns";

/// Effectiveness recorded for rows that carry no score of their own.
pub const NEUTRAL_EFFECTIVENESS: f64 = 0.5;

/// One row per pattern, bucket by bucket, then one per cross-domain insight.
pub fn rows(patterns: &PatternSet) -> RecallResult<Vec<DatasetRow>> {
    let mut out = Vec::with_capacity(patterns.total());
    for (pattern_type, bucket) in &patterns.by_type {
        for pattern in bucket {
            out.push(pattern_row(pattern_type, pattern)?);
        }
    }
    for insight in &patterns.cross_domain_insights {
        out.push(insight_row(insight)?);
    }
    Ok(out)
}

pub fn pattern_row(pattern_type: &str, pattern: &Pattern) -> RecallResult<DatasetRow> {
    build_row(
        pattern_type,
        DatasetInput {
            query: pattern.memory_query.clone(),
            context: Value::Object(Map::new()),
        },
        DatasetExpected {
            action_type: Some(pattern.action_type),
            effectiveness: pattern.effectiveness,
        },
        &pattern.trace_id,
    )
}

/// Insights have no query or action; the planning context is the input.
pub fn insight_row(insight: &CrossDomainInsight) -> RecallResult<DatasetRow> {
    build_row(
        CROSS_DOMAIN_BUCKET,
        DatasetInput {
            query: Value::String(String::new()),
            context: serde_json::to_value(&insight.gtd_context)?,
        },
        DatasetExpected {
            action_type: None,
            effectiveness: NEUTRAL_EFFECTIVENESS,
        },
        &insight.trace_id,
    )
}

/// Dataset-level metadata recorded when the dataset is created.
pub fn dataset_metadata(patterns: &PatternSet, created_at: chrono::DateTime<chrono::Utc>) -> Value {
    json!({
        "created_at": created_at.to_rfc3339(),
        "pattern_types": patterns.pattern_types(),
        "total_patterns": patterns.total(),
    })
}

fn build_row(
    pattern_type: &str,
    input: DatasetInput,
    expected_output: DatasetExpected,
    trace_id: &str,
) -> RecallResult<DatasetRow> {
    let metadata = DatasetRowMetadata {
        pattern_type: pattern_type.to_string(),
        trace_id: trace_id.to_string(),
    };
    let serialized = serde_json::to_string(&(&input, &expected_output, &metadata))?;
    Ok(DatasetRow {
        id: blake3::hash(serialized.as_bytes()).to_hex().to_string(),
        pattern_type: pattern_type.to_string(),
        input,
        expected_output,
        metadata,
    })
}
