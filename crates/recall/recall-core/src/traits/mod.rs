mod dataset_sink;
mod memory_store;
mod pattern_correlator;
mod signal_scorer;
mod temporal_decay;
mod trace_source;

pub use dataset_sink::IDatasetSink;
pub use memory_store::IMemoryStore;
pub use pattern_correlator::IPatternCorrelator;
pub use signal_scorer::ISignalScorer;
pub use temporal_decay::ITemporalDecay;
pub use trace_source::ITraceSource;
