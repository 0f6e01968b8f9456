//! In-memory collaborators for service tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use recall_core::errors::{DatasetError, MemoryStoreError, RecallResult, TraceSourceError};
use recall_core::memory::{Confidence, MemoryRecord};
use recall_core::models::{DatasetRow, Trace, TraceObservation};
use recall_core::traits::{IDatasetSink, IMemoryStore, ITraceSource};
use serde::Deserialize;

#[derive(Default)]
pub struct InMemoryTraceSource {
    traces: Vec<Trace>,
    observations: HashMap<String, Vec<TraceObservation>>,
    pub fail_observations_for: Option<String>,
}

impl InMemoryTraceSource {
    pub fn add(&mut self, trace: Trace, observations: Vec<TraceObservation>) {
        self.observations.insert(trace.id.clone(), observations);
        self.traces.push(trace);
    }
}

impl ITraceSource for InMemoryTraceSource {
    fn fetch_traces(&self, since: DateTime<Utc>, limit: usize) -> RecallResult<Vec<Trace>> {
        Ok(self
            .traces
            .iter()
            .filter(|t| t.timestamp >= since)
            .take(limit)
            .cloned()
            .collect())
    }

    fn fetch_observations(&self, trace_id: &str) -> RecallResult<Vec<TraceObservation>> {
        if self.fail_observations_for.as_deref() == Some(trace_id) {
            return Err(TraceSourceError::Unavailable {
                reason: "connection reset".into(),
            }
            .into());
        }
        self.observations.get(trace_id).cloned().ok_or_else(|| {
            TraceSourceError::TraceNotFound {
                trace_id: trace_id.to_string(),
            }
            .into()
        })
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<HashMap<String, MemoryRecord>>,
    pub writes: Mutex<usize>,
    reject_writes: bool,
    failures_left: Mutex<usize>,
    write_delay: Option<Duration>,
}

impl InMemoryStore {
    pub fn with_records(records: Vec<MemoryRecord>) -> Self {
        Self {
            records: Mutex::new(records.into_iter().map(|r| (r.id.clone(), r)).collect()),
            ..Default::default()
        }
    }

    /// Every write fails.
    pub fn rejecting_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    /// The first `n` writes fail; later ones succeed.
    pub fn failing_first_writes(self, n: usize) -> Self {
        *self.failures_left.lock().unwrap() = n;
        self
    }

    /// Each write sleeps before completing.
    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = Some(delay);
        self
    }

    pub fn confidence(&self, id: &str) -> f64 {
        self.records.lock().unwrap()[id].confidence.value()
    }
}

impl IMemoryStore for InMemoryStore {
    fn read(&self, memory_id: &str) -> RecallResult<MemoryRecord> {
        self.records
            .lock()
            .unwrap()
            .get(memory_id)
            .cloned()
            .ok_or_else(|| {
                MemoryStoreError::MemoryNotFound {
                    id: memory_id.to_string(),
                }
                .into()
            })
    }

    fn update_confidence(&self, memory_id: &str, confidence: Confidence) -> RecallResult<()> {
        if let Some(delay) = self.write_delay {
            std::thread::sleep(delay);
        }
        let transient = {
            let mut left = self.failures_left.lock().unwrap();
            let fail = *left > 0;
            *left = left.saturating_sub(1);
            fail
        };
        if self.reject_writes || transient {
            return Err(MemoryStoreError::WriteRejected {
                id: memory_id.to_string(),
                reason: "read-only replica".into(),
            }
            .into());
        }
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(memory_id)
            .ok_or_else(|| MemoryStoreError::MemoryNotFound {
                id: memory_id.to_string(),
            })?;
        record.confidence = confidence;
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub datasets: Mutex<Vec<(String, String, serde_json::Value)>>,
    pub rows: Mutex<Vec<(String, DatasetRow)>>,
    pub fail_create: bool,
}

impl IDatasetSink for RecordingSink {
    fn create_dataset(
        &self,
        name: &str,
        description: &str,
        metadata: &serde_json::Value,
    ) -> RecallResult<()> {
        if self.fail_create {
            return Err(DatasetError::CreateFailed {
                name: name.to_string(),
                reason: "quota exceeded".into(),
            }
            .into());
        }
        self.datasets
            .lock()
            .unwrap()
            .push((name.to_string(), description.to_string(), metadata.clone()));
        Ok(())
    }

    fn add_row(&self, dataset_name: &str, row: &DatasetRow) -> RecallResult<()> {
        self.rows
            .lock()
            .unwrap()
            .push((dataset_name.to_string(), row.clone()));
        Ok(())
    }
}

#[derive(Deserialize)]
struct GoldenTrace {
    trace_id: String,
    observations: Vec<TraceObservation>,
}

/// Load a golden trace fixture as a (trace, observations) pair.
pub fn golden_trace(relative_path: &str) -> (Trace, Vec<TraceObservation>) {
    let golden: GoldenTrace = test_fixtures::load_fixture(relative_path);
    let started = golden.observations[0].timestamp;
    (Trace::new(golden.trace_id, started), golden.observations)
}
