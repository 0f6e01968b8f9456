//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the outcome of a pattern extraction run.
pub fn pattern_extracted(traces: usize, patterns: usize, insights: usize) {
    tracing::info!(
        event = "pattern_extracted",
        traces = traces,
        patterns = patterns,
        insights = insights,
        "patterns extracted"
    );
}

/// Log a confidence write-back after an application event.
pub fn confidence_updated(memory_id: &str, previous: f64, updated: f64, delta: f64) {
    tracing::info!(
        event = "confidence_updated",
        memory_id = %memory_id,
        previous = previous,
        updated = updated,
        delta = delta,
        "memory confidence updated"
    );
}

/// Log a redelivered application event that was not applied again.
pub fn duplicate_application_skipped(event_id: &str, memory_id: &str) {
    tracing::warn!(
        event = "duplicate_application_skipped",
        event_id = %event_id,
        memory_id = %memory_id,
        "duplicate application event skipped"
    );
}

/// Log a prompt improvement suggestion.
pub fn improvement_suggested(prompt: &str, recommendation: &str, effectiveness: f64, samples: usize) {
    tracing::info!(
        event = "improvement_suggested",
        prompt = %prompt,
        recommendation = %recommendation,
        effectiveness = effectiveness,
        samples = samples,
        "prompt improvement suggested"
    );
}

/// Log an evaluation dataset export.
pub fn dataset_created(name: &str, items: usize) {
    tracing::info!(
        event = "dataset_created",
        dataset = %name,
        items = items,
        "evaluation dataset created"
    );
}
