//! # recall-observability
//!
//! Subscriber installation, span macros and structured events shared by the
//! service layer.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter, LOG_ENV};
