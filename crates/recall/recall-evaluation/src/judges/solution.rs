use serde::{Deserialize, Serialize};
use serde_json::Value;

use recall_core::models::truthy;

use super::lowered;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionJudgement {
    pub has_steps: bool,
    pub has_commands: bool,
    pub has_explanation: bool,
    /// `None` when no outcome was reported.
    pub outcome_successful: Option<bool>,
    pub effectiveness_score: f64,
}

/// Text longer than this counts as an explanation.
const EXPLANATION_MIN_CHARS: usize = 100;

pub fn judge(solution: &Value, outcome: Option<&Value>) -> SolutionJudgement {
    let text = lowered(solution);
    let has_steps = text.contains("step");
    let has_commands = text.contains("command") || text.contains("run");
    let has_explanation = text.chars().count() > EXPLANATION_MIN_CHARS;
    let outcome_successful = outcome
        .filter(|o| truthy(o))
        .map(|o| o.get("success").is_some_and(truthy));

    let mut effectiveness_score = 0.0;
    if has_steps {
        effectiveness_score += 0.3;
    }
    if has_commands {
        effectiveness_score += 0.3;
    }
    if has_explanation {
        effectiveness_score += 0.2;
    }
    effectiveness_score += match outcome_successful {
        Some(true) => 0.2,
        Some(false) => 0.0,
        None => 0.1,
    };

    SolutionJudgement {
        has_steps,
        has_commands,
        has_explanation,
        outcome_successful,
        effectiveness_score,
    }
}
