//! Cross-domain insight detection: a trace that touches both planning and
//! coding activity.

use recall_core::constants::FALLBACK_INSIGHT;
use recall_core::models::{CodingContext, CrossDomainInsight, PlanningContext};
use serde_json::Value;

use crate::classify::ClassifiedObservation;

pub fn is_cross_domain(observations: &[ClassifiedObservation]) -> bool {
    observations.iter().any(|o| o.domains.planning) && observations.iter().any(|o| o.domains.coding)
}

/// Planning context from the last `gtd` observation.
pub fn planning_context(observations: &[ClassifiedObservation]) -> PlanningContext {
    observations
        .iter()
        .rev()
        .find(|o| o.domains.gtd)
        .map(|o| PlanningContext {
            task: o.metadata_value("current_task"),
            project: o.metadata_value("project"),
            phase: o.metadata_value("phase"),
        })
        .unwrap_or_default()
}

/// Coding context from the last technical observation.
pub fn coding_context(observations: &[ClassifiedObservation]) -> CodingContext {
    observations
        .iter()
        .rev()
        .find(|o| o.domains.technical)
        .map(|o| CodingContext {
            error: o.metadata_value("error"),
            language: o.metadata_value("language"),
            framework: o.metadata_value("framework"),
        })
        .unwrap_or_default()
}

/// Text of the first output mentioning an insight.
pub fn insight_text(observations: &[ClassifiedObservation]) -> String {
    observations
        .iter()
        .filter(|o| recall_core::models::truthy(&o.output))
        .find_map(|o| {
            let text = match &o.output {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            text.to_lowercase().contains("insight").then_some(text)
        })
        .unwrap_or_else(|| FALLBACK_INSIGHT.to_string())
}

pub fn detect(trace_id: &str, observations: &[ClassifiedObservation]) -> Option<CrossDomainInsight> {
    if !is_cross_domain(observations) {
        return None;
    }
    Some(CrossDomainInsight {
        trace_id: trace_id.to_string(),
        gtd_context: planning_context(observations),
        coding_context: coding_context(observations),
        insight: insight_text(observations),
    })
}
