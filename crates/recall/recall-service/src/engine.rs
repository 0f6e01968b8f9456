//! RecallEngine: owns the config, the algorithm components and the injected
//! collaborators.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use moka::policy::EvictionPolicy;
use moka::sync::Cache;
use recall_core::errors::RecallResult;
use recall_core::traits::{
    IDatasetSink, IMemoryStore, IPatternCorrelator, ISignalScorer, ITemporalDecay, ITraceSource,
};
use recall_core::RecallConfig;
use recall_correlation::PatternCorrelator;
use recall_decay::TemporalDecayModel;
use recall_evaluation::EffectivenessAggregator;
use recall_signals::SignalScorer;

/// The main engine.
///
/// Algorithm components default to the workspace implementations built from
/// the config; each can be swapped through a `with_*` builder.
pub struct RecallEngine {
    pub(crate) config: RecallConfig,
    pub(crate) traces: Arc<dyn ITraceSource>,
    pub(crate) memories: Arc<dyn IMemoryStore>,
    pub(crate) dataset_sink: Option<Arc<dyn IDatasetSink>>,
    pub(crate) decay: Box<dyn ITemporalDecay>,
    pub(crate) scorer: Box<dyn ISignalScorer>,
    pub(crate) correlator: Box<dyn IPatternCorrelator>,
    pub(crate) aggregator: EffectivenessAggregator,
    /// Per-event lock over an "applied" flag, keyed by event id. Bounded by
    /// `tracking.dedup_capacity` and `tracking.dedup_ttl_secs`.
    pub(crate) applied_events: Cache<String, Arc<Mutex<bool>>>,
}

impl RecallEngine {
    /// Build an engine from a validated config.
    pub fn new(
        config: RecallConfig,
        traces: Arc<dyn ITraceSource>,
        memories: Arc<dyn IMemoryStore>,
    ) -> RecallResult<Self> {
        config.validate()?;
        let applied_events = Cache::builder()
            .max_capacity(config.tracking.dedup_capacity)
            .time_to_live(Duration::from_secs(config.tracking.dedup_ttl_secs))
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Ok(Self {
            decay: Box::new(TemporalDecayModel::from_config(&config.decay)),
            scorer: Box::new(SignalScorer::new()),
            correlator: Box::new(PatternCorrelator::from_config(&config.correlation)),
            aggregator: EffectivenessAggregator::from_config(&config.aggregation),
            config,
            traces,
            memories,
            dataset_sink: None,
            applied_events,
        })
    }

    pub fn with_dataset_sink(mut self, sink: Arc<dyn IDatasetSink>) -> Self {
        self.dataset_sink = Some(sink);
        self
    }

    pub fn with_decay(mut self, decay: Box<dyn ITemporalDecay>) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn ISignalScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_correlator(mut self, correlator: Box<dyn IPatternCorrelator>) -> Self {
        self.correlator = correlator;
        self
    }

    pub fn config(&self) -> &RecallConfig {
        &self.config
    }

    pub fn has_dataset_sink(&self) -> bool {
        self.dataset_sink.is_some()
    }
}
