//! Application tracking: outcome signals feed back into stored confidence.

use std::sync::{Arc, Mutex, PoisonError};

use recall_core::errors::RecallResult;
use recall_core::memory::Confidence;
use recall_core::models::{ApplicationEvent, IndicatorSet};
use recall_observability::tracing_setup::events;
use serde::{Deserialize, Serialize};

use crate::engine::RecallEngine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationReport {
    pub event_id: String,
    pub memory_id: String,
    pub effectiveness: f64,
    pub indicators: IndicatorSet,
    pub previous_confidence: Confidence,
    pub new_confidence: Confidence,
    /// The event was already applied; confidence was left untouched.
    pub duplicate: bool,
}

impl RecallEngine {
    /// Score an application outcome and write the updated confidence back.
    ///
    /// The delta path is not idempotent, so each `event_id` is applied at
    /// most once within the dedup horizon (`tracking.dedup_ttl_secs`, at most
    /// `tracking.dedup_capacity` ids). A redelivery reports `duplicate = true`
    /// and the current confidence.
    ///
    /// Deliveries of the same event serialize on a per-event lock. If the
    /// read or write fails the event stays unapplied, and a delivery that was
    /// waiting on it, or a later retry, applies it instead.
    pub fn track_application(&self, event: &ApplicationEvent) -> RecallResult<ApplicationReport> {
        let _span =
            recall_observability::tracking_span!(event.event_id, event.memory_id).entered();

        let indicators = IndicatorSet::from(&event.outcome);
        let effectiveness = self.scorer.effectiveness(&indicators);

        let slot = self
            .applied_events
            .get_with(event.event_id.clone(), || Arc::new(Mutex::new(false)));
        let mut applied = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if *applied {
            let current = self.memories.read(&event.memory_id)?.confidence;
            events::duplicate_application_skipped(&event.event_id, &event.memory_id);
            return Ok(ApplicationReport {
                event_id: event.event_id.clone(),
                memory_id: event.memory_id.clone(),
                effectiveness,
                indicators,
                previous_confidence: current,
                new_confidence: current,
                duplicate: true,
            });
        }

        match self.apply(event, &indicators) {
            Ok((previous, updated)) => {
                *applied = true;
                events::confidence_updated(
                    &event.memory_id,
                    previous.value(),
                    updated.value(),
                    updated.value() - previous.value(),
                );
                Ok(ApplicationReport {
                    event_id: event.event_id.clone(),
                    memory_id: event.memory_id.clone(),
                    effectiveness,
                    indicators,
                    previous_confidence: previous,
                    new_confidence: updated,
                    duplicate: false,
                })
            }
            Err(err) => {
                tracing::warn!(
                    event_id = %event.event_id,
                    memory_id = %event.memory_id,
                    error = %err,
                    "application not applied"
                );
                Err(err)
            }
        }
    }

    fn apply(
        &self,
        event: &ApplicationEvent,
        indicators: &IndicatorSet,
    ) -> RecallResult<(Confidence, Confidence)> {
        let record = self.memories.read(&event.memory_id)?;
        let updated = self.scorer.apply_delta(record.confidence, indicators);
        self.memories.update_confidence(&event.memory_id, updated)?;
        Ok((record.confidence, updated))
    }

    /// Number of remembered application events whose delta was applied.
    pub fn applied_event_count(&self) -> usize {
        self.applied_events
            .iter()
            .filter(|(_, slot)| *slot.lock().unwrap_or_else(PoisonError::into_inner))
            .count()
    }

    /// Number of event ids currently remembered for redelivery detection,
    /// applied or not. Never exceeds `tracking.dedup_capacity` once pending
    /// evictions have run.
    pub fn remembered_event_count(&self) -> u64 {
        self.applied_events.run_pending_tasks();
        self.applied_events.entry_count()
    }
}
