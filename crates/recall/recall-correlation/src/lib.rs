//! # recall-correlation
//!
//! Mines a trace's observations for memory searches that were followed,
//! within a causality window, by a successful action. Each such pair
//! becomes a [`Pattern`](recall_core::Pattern) with an effectiveness score.
//! A trace touching both planning and coding activity additionally yields a
//! cross-domain insight.
//!
//! Observations are classified exactly once on ingestion ([`classify`]);
//! everything downstream works on the typed classification.

pub mod classify;
pub mod cross_domain;
pub mod effectiveness;
pub mod engine;

pub use classify::{ClassifiedObservation, DomainSignals, MemorySearch, ObservedAction};
pub use engine::PatternCorrelator;
