//! # recall-core
//!
//! Foundation crate for the Recall effectiveness engine.
//! Defines the data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RecallConfig;
pub use errors::{RecallError, RecallResult};
pub use memory::{Confidence, MemoryRecord, MemoryType};
pub use models::{ActionKind, Pattern, PatternSet, Trace, TraceObservation};
