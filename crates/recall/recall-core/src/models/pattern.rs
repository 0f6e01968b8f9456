use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{CROSS_DOMAIN_BUCKET, PROMPT_PREFIX};

/// Terminal outcome kinds recognized on an action observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Command,
    Task,
    ErrorResolution,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Task => "task",
            Self::ErrorResolution => "error_resolution",
        }
    }

    /// Bucket name for patterns ending in this action: `memory_to_{kind}`.
    pub fn pattern_type(self) -> String {
        format!("memory_to_{}", self.as_str())
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A correlated (memory search → action) pair within one trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub memory_query: Value,
    pub memory_type: Option<String>,
    pub action_type: ActionKind,
    /// Seconds between the search and the action.
    pub time_to_action: f64,
    pub effectiveness: f64,
    pub trace_id: String,
}

impl Pattern {
    pub fn pattern_type(&self) -> String {
        self.action_type.pattern_type()
    }

    /// Name of the search prompt variant this pattern is credited to.
    pub fn prompt_name(&self) -> String {
        let search_type = self.memory_type.as_deref().unwrap_or("unspecified");
        format!("{PROMPT_PREFIX}{search_type}")
    }
}

/// Planning-side context of a cross-domain insight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningContext {
    pub task: Option<Value>,
    pub project: Option<Value>,
    pub phase: Option<Value>,
}

/// Coding-side context of a cross-domain insight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodingContext {
    pub error: Option<Value>,
    pub language: Option<Value>,
    pub framework: Option<Value>,
}

/// Connection between planning and coding activity observed in one trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossDomainInsight {
    pub trace_id: String,
    pub gtd_context: PlanningContext,
    pub coding_context: CodingContext,
    pub insight: String,
}

/// Patterns bucketed by pattern type, plus cross-domain insights.
///
/// Buckets are ordered by name so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternSet {
    pub by_type: BTreeMap<String, Vec<Pattern>>,
    pub cross_domain_insights: Vec<CrossDomainInsight>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pattern: Pattern) {
        self.by_type
            .entry(pattern.pattern_type())
            .or_default()
            .push(pattern);
    }

    pub fn push_insight(&mut self, insight: CrossDomainInsight) {
        self.cross_domain_insights.push(insight);
    }

    /// Append another set, keeping `other`'s patterns after ours.
    pub fn merge(&mut self, other: PatternSet) {
        for (pattern_type, patterns) in other.by_type {
            self.by_type.entry(pattern_type).or_default().extend(patterns);
        }
        self.cross_domain_insights
            .extend(other.cross_domain_insights);
    }

    /// Patterns of one type; empty when the bucket does not exist.
    pub fn get(&self, pattern_type: &str) -> &[Pattern] {
        self.by_type
            .get(pattern_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.by_type.values().flatten()
    }

    pub fn pattern_count(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    /// Patterns plus cross-domain insights.
    pub fn total(&self) -> usize {
        self.pattern_count() + self.cross_domain_insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-empty bucket names, with the cross-domain bucket last.
    pub fn pattern_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .by_type
            .iter()
            .filter(|(_, patterns)| !patterns.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        if !self.cross_domain_insights.is_empty() {
            types.push(CROSS_DOMAIN_BUCKET.to_string());
        }
        types
    }

    /// Effectiveness samples grouped by the search prompt they are credited to.
    pub fn effectiveness_by_prompt(&self) -> BTreeMap<String, Vec<f64>> {
        let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for pattern in self.patterns() {
            grouped
                .entry(pattern.prompt_name())
                .or_default()
                .push(pattern.effectiveness);
        }
        grouped
    }
}
