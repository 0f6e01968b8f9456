//! # recall-service
//!
//! [`RecallEngine`] wires the algorithm crates to the outside world through
//! the collaborator traits in `recall_core::traits`: a trace source, a
//! memory store and an optional dataset sink. No component is a global;
//! everything is constructed and injected explicitly.

pub mod engine;
pub mod evaluation;
pub mod extraction;
pub mod relevance;
pub mod tracking;

pub use engine::RecallEngine;
pub use evaluation::DatasetSummary;
pub use tracking::ApplicationReport;
