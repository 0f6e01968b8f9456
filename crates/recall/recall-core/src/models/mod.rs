pub mod application;
pub mod dataset;
pub mod indicators;
pub mod json;
pub mod pattern;
pub mod temporal;
pub mod trace;

pub use application::{ActionOutcome, ApplicationEvent};
pub use dataset::{DatasetExpected, DatasetInput, DatasetRow, DatasetRowMetadata};
pub use indicators::{Indicator, IndicatorSet};
pub use json::truthy;
pub use pattern::{
    ActionKind, CodingContext, CrossDomainInsight, Pattern, PatternSet, PlanningContext,
};
pub use temporal::TemporalAssessment;
pub use trace::{Trace, TraceObservation};
