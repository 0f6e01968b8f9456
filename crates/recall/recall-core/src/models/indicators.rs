use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ActionOutcome;

/// Implicit success signals recognized by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    CommandExecuted,
    TestsPassed,
    TaskCompleted,
    ErrorResolved,
    FileModified,
}

impl Indicator {
    pub const ALL: [Indicator; 5] = [
        Self::CommandExecuted,
        Self::TestsPassed,
        Self::TaskCompleted,
        Self::ErrorResolved,
        Self::FileModified,
    ];

    /// Metadata key for this indicator.
    pub fn key(self) -> &'static str {
        match self {
            Self::CommandExecuted => "command_executed",
            Self::TestsPassed => "tests_passed",
            Self::TaskCompleted => "task_completed",
            Self::ErrorResolved => "error_resolved",
            Self::FileModified => "file_modified",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.key() == key)
    }
}

/// Observed indicator values. An indicator that is absent carries no
/// evidence; one that is present is either a success or a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSet {
    values: BTreeMap<Indicator, bool>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an indicator. `None` removes any previous evidence.
    pub fn set(&mut self, indicator: Indicator, value: Option<bool>) {
        match value {
            Some(v) => {
                self.values.insert(indicator, v);
            }
            None => {
                self.values.remove(&indicator);
            }
        }
    }

    pub fn with(mut self, indicator: Indicator, value: bool) -> Self {
        self.values.insert(indicator, value);
        self
    }

    pub fn get(&self, indicator: Indicator) -> Option<bool> {
        self.values.get(&indicator).copied()
    }

    /// Present indicators in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, bool)> + '_ {
        self.values.iter().map(|(i, v)| (*i, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&ActionOutcome> for IndicatorSet {
    /// `command_executed` is derived from the exit code: present only when an
    /// exit code was reported, successful only when it is zero.
    fn from(outcome: &ActionOutcome) -> Self {
        let mut set = Self::new();
        set.set(Indicator::CommandExecuted, outcome.exit_code.map(|c| c == 0));
        set.set(Indicator::TestsPassed, outcome.tests_passed);
        set.set(Indicator::TaskCompleted, outcome.task_completed);
        set.set(Indicator::ErrorResolved, outcome.error_resolved);
        set.set(Indicator::FileModified, outcome.file_modified);
        set
    }
}
