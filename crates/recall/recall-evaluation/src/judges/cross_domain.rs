use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lowered;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossDomainJudgement {
    pub insights_count: usize,
    pub domains_connected: bool,
    pub has_actionable: bool,
    pub discovery_score: f64,
}

/// Scores insights linking two domains. Different domains earn 0.3, an
/// insight mentioning an action or application earns 0.4, and volume earns
/// up to 0.3 at five insights.
pub fn judge(query_domain: &str, target_domain: &str, insights: &[Value]) -> CrossDomainJudgement {
    let domains_connected = query_domain != target_domain;
    let has_actionable = insights.iter().any(|i| {
        let text = lowered(i);
        text.contains("action") || text.contains("apply")
    });

    let mut discovery_score = 0.0;
    if domains_connected {
        discovery_score += 0.3;
    }
    if has_actionable {
        discovery_score += 0.4;
    }
    discovery_score += (insights.len() as f64 / 5.0 * 0.3).min(0.3);

    CrossDomainJudgement {
        insights_count: insights.len(),
        domains_connected,
        has_actionable,
        discovery_score,
    }
}
