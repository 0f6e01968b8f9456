use recall_core::models::Indicator;

/// Weight of an indicator in the one-shot weighted average.
pub fn weight(indicator: Indicator) -> f64 {
    match indicator {
        Indicator::CommandExecuted => 0.3,
        Indicator::TestsPassed => 0.4,
        Indicator::TaskCompleted => 0.5,
        Indicator::ErrorResolved => 0.4,
        Indicator::FileModified => 0.2,
    }
}

/// Confidence delta on success.
pub fn success_delta(indicator: Indicator) -> f64 {
    match indicator {
        Indicator::CommandExecuted => 0.3,
        Indicator::TestsPassed => 0.4,
        Indicator::TaskCompleted => 0.5,
        Indicator::ErrorResolved => 0.4,
        Indicator::FileModified => 0.2,
    }
}

/// Confidence delta on failure. Never positive.
pub fn failure_delta(indicator: Indicator) -> f64 {
    match indicator {
        Indicator::CommandExecuted => -0.1,
        Indicator::TestsPassed => -0.2,
        Indicator::TaskCompleted => 0.0,
        Indicator::ErrorResolved => -0.1,
        Indicator::FileModified => 0.0,
    }
}

/// Credit for an application whose outcome was never reported.
pub const UNKNOWN_OUTCOME_CREDIT: f64 = 0.1;

/// Effectiveness when there is no evidence at all.
pub const NEUTRAL_SCORE: f64 = 0.5;
