//! # recall-signals
//!
//! Turns implicit outcome signals (exit codes, test results, task completion)
//! into memory effectiveness, two ways:
//! one-shot weighted average for evaluation, and signed deltas for
//! incremental confidence tracking.

pub mod delta;
pub mod engine;
pub mod parse;
pub mod weighted;
pub mod weights;

pub use engine::{SignalEvaluation, SignalScorer};
