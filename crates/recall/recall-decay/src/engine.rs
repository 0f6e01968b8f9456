use chrono::{DateTime, Utc};
use recall_core::config::DecayConfig;
use recall_core::memory::{MemoryRecord, MemoryType};
use recall_core::models::TemporalAssessment;
use recall_core::traits::ITemporalDecay;
use tracing::debug;

use crate::formula;
use crate::historical;
use crate::rates::RateTable;
use crate::supersession;

/// Temporal decay model. Built once from config and shared; holds no
/// per-memory state.
#[derive(Debug, Clone)]
pub struct TemporalDecayModel {
    rates: RateTable,
    floor: f64,
    supersession_multiplier: f64,
    historical_threshold_days: i64,
}

impl TemporalDecayModel {
    /// Model with the documented default rates.
    pub fn new() -> Self {
        Self::from_config(&DecayConfig::default())
    }

    pub fn from_config(config: &DecayConfig) -> Self {
        Self {
            rates: RateTable::from_config(config),
            floor: config.floor,
            supersession_multiplier: config.supersession_multiplier,
            historical_threshold_days: config.historical_threshold_days,
        }
    }

    pub fn rate_for(&self, memory_type: &MemoryType) -> f64 {
        self.rates.rate_for(memory_type)
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Un-superseded weight for a type at a given age.
    pub fn weight_for(&self, memory_type: &MemoryType, age_days: i64) -> f64 {
        formula::weight_with_floor(age_days, self.rate_for(memory_type), self.floor)
    }

    /// Un-superseded weight of a record as of `now`.
    pub fn base_weight(&self, memory: &MemoryRecord, now: DateTime<Utc>) -> f64 {
        self.weight_for(&memory.memory_type, memory.age_days(now))
    }

    pub fn is_historical(&self, age_days: i64) -> bool {
        historical::is_historical(age_days, self.historical_threshold_days)
    }

    /// Full read-time assessment of a record.
    pub fn assess_record(&self, memory: &MemoryRecord, now: DateTime<Utc>) -> TemporalAssessment {
        let age_days = memory.age_days(now);
        let decay_rate = self.rate_for(&memory.memory_type);
        let base_weight = formula::weight_with_floor(age_days, decay_rate, self.floor);
        let effective_weight =
            supersession::apply(base_weight, memory.superseded, self.supersession_multiplier);
        let effective_confidence =
            formula::effective_confidence(memory.confidence.value(), effective_weight);
        let ranking_score = formula::ranking_score(memory.confidence.value(), effective_weight);

        debug!(
            memory_id = %memory.id,
            memory_type = %memory.memory_type,
            age_days,
            base_weight,
            effective_weight,
            "temporal weight computed"
        );

        TemporalAssessment {
            memory_id: memory.id.clone(),
            age_days,
            decay_rate,
            base_weight,
            effective_weight,
            superseded: memory.superseded,
            historical: self.is_historical(age_days),
            effective_confidence,
            ranking_score,
        }
    }

    /// Assess a batch of records against the same `now`.
    pub fn assess_batch(
        &self,
        memories: &[MemoryRecord],
        now: DateTime<Utc>,
    ) -> Vec<TemporalAssessment> {
        memories
            .iter()
            .map(|m| self.assess_record(m, now))
            .collect()
    }
}

impl Default for TemporalDecayModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ITemporalDecay for TemporalDecayModel {
    fn assess(&self, memory: &MemoryRecord, now: DateTime<Utc>) -> TemporalAssessment {
        self.assess_record(memory, now)
    }
}
