use chrono::{DateTime, Utc};

use crate::errors::RecallResult;
use crate::models::{Trace, TraceObservation};

/// Read access to the trace/observability backend.
///
/// Errors are returned to the caller as-is. Retry policy belongs to the
/// implementation.
pub trait ITraceSource: Send + Sync {
    /// Traces started at or after `since`, at most `limit` of them.
    fn fetch_traces(&self, since: DateTime<Utc>, limit: usize) -> RecallResult<Vec<Trace>>;

    /// Observations of one trace, in recorded order.
    fn fetch_observations(&self, trace_id: &str) -> RecallResult<Vec<TraceObservation>>;
}
