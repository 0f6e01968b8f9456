use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lowered;

/// Phrases marking content as tied to outdated technology.
const OUTDATED_MARKERS: [&str; 4] = ["deprecated", "legacy", "old version", "no longer supported"];

const KEEP_BELOW_DAYS: i64 = 30;
const UPDATE_BELOW_DAYS: i64 = 90;
const STALE_AFTER_DAYS: i64 = 90;
/// Freshness reaches zero at this age.
const FRESHNESS_HORIZON_DAYS: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessRecommendation {
    Keep,
    Update,
    Supersede,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreshnessJudgement {
    pub age_days: i64,
    pub is_stale: bool,
    pub technology_current: bool,
    pub recommendation: FreshnessRecommendation,
    pub freshness_score: f64,
}

pub fn technology_current(memory: &Value) -> bool {
    let text = lowered(memory);
    !OUTDATED_MARKERS.iter().any(|m| text.contains(m))
}

/// Judge a memory's freshness. A missing creation time counts as age 0.
pub fn judge(memory: &Value, created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> FreshnessJudgement {
    let age_days = created_at
        .map(|c| (now - c).num_days().max(0))
        .unwrap_or(0);
    let technology_current = technology_current(memory);

    let recommendation = if age_days < KEEP_BELOW_DAYS {
        FreshnessRecommendation::Keep
    } else if age_days < UPDATE_BELOW_DAYS {
        FreshnessRecommendation::Update
    } else {
        FreshnessRecommendation::Supersede
    };

    let mut freshness_score = (1.0 - age_days as f64 / FRESHNESS_HORIZON_DAYS).max(0.0);
    if !technology_current {
        freshness_score *= 0.5;
    }

    FreshnessJudgement {
        age_days,
        is_stale: age_days > STALE_AFTER_DAYS,
        technology_current,
        recommendation,
        freshness_score,
    }
}
