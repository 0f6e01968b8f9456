//! # recall-evaluation
//!
//! Offline evaluation over extracted patterns:
//! - [`aggregation`]: per-prompt effectiveness and improvement suggestions
//! - [`ab_test`]: variant comparison
//! - [`dataset`]: evaluation rows with content-derived ids
//! - [`judges`]: deterministic heuristic scorers for retrieval, insights,
//!   solutions and freshness

pub mod aggregation;
pub mod dataset;
pub mod judges;

pub use ab_test::{compare_variants, AbTestReport, VariantScores, VariantStats};
pub use aggregation::{EffectivenessAggregator, ImprovementSuggestion, RecommendationKind};
