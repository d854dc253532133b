//! Telemetry metric name constants.
//!
//! Centralised metric names for lunara operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `lunara_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `outcome` — prediction result: "ok" | "no_data" | "invalid"

/// Total predictions served through [`CyclePredictor`](crate::CyclePredictor).
///
/// Labels: `outcome` ("ok" | "no_data" | "invalid").
pub const PREDICTIONS_TOTAL: &str = "lunara_predictions_total";

/// Total query-cache hits (fresh entry returned without running the producer).
pub const CACHE_HITS_TOTAL: &str = "lunara_cache_hits_total";

/// Total query-cache misses (no entry, or entry older than the caller's TTL).
pub const CACHE_MISSES_TOTAL: &str = "lunara_cache_misses_total";

/// Total explicit invalidations (single-key and prefix sweeps combined).
pub const CACHE_INVALIDATIONS_TOTAL: &str = "lunara_cache_invalidations_total";

/// Total forced refetches via [`QueryCache::refetch`](crate::QueryCache::refetch).
pub const CACHE_REFETCHES_TOTAL: &str = "lunara_cache_refetches_total";
