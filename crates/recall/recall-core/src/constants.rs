/// Metadata key marking a memory operation on an observation.
pub const META_MEMORY_OPERATION: &str = "memory_operation";
/// Value of [`META_MEMORY_OPERATION`] for a memory search.
pub const MEMORY_OPERATION_SEARCH: &str = "search";
/// Metadata key carrying the declared search type.
pub const META_SEARCH_TYPE: &str = "search_type";

/// Action marker keys, in classification precedence order.
pub const META_COMMAND_EXECUTED: &str = "command_executed";
pub const META_TASK_COMPLETED: &str = "task_completed";
pub const META_ERROR_RESOLVED: &str = "error_resolved";

/// Bucket name for cross-domain insights in a pattern set.
pub const CROSS_DOMAIN_BUCKET: &str = "cross_domain_insights";

/// Prefix for per-search-type prompt names.
pub const PROMPT_PREFIX: &str = "memory_search_";

/// Insight text used when no observation output mentions an insight.
pub const FALLBACK_INSIGHT: &str = "Cross-domain connection identified";
