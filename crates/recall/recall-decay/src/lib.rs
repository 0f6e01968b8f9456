//! # recall-decay
//!
//! Temporal decay model: `weight = max(floor, 1 - age_days × rate)`, with the
//! rate chosen by memory type. Supersession is a separate multiplier applied
//! after the floor. Weight is recomputed on every read and never stored.

pub mod engine;
pub mod formula;
pub mod historical;
pub mod rates;
pub mod supersession;

pub use engine::TemporalDecayModel;
pub use rates::RateTable;
