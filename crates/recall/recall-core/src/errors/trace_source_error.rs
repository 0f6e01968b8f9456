/// Trace backend collaborator errors. Surfaced unmodified; never retried here.
#[derive(Debug, thiserror::Error)]
pub enum TraceSourceError {
    #[error("trace source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("trace not found: {trace_id}")]
    TraceNotFound { trace_id: String },

    #[error("malformed observation {observation_id}: {reason}")]
    MalformedObservation {
        observation_id: String,
        reason: String,
    },
}
