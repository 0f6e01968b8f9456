//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use recall_core::config::ObservabilityConfig;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "RECALL_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `RECALL_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Fails if a global subscriber is
/// already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .finish()
        .try_init()
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .finish()
        .try_init()
}

/// Initialize from the `[observability]` config section. `RECALL_LOG` still
/// wins over the configured level when set.
pub fn init_from_config(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if config.json {
        builder.json().finish().try_init()
    } else {
        builder.finish().try_init()
    }
}
