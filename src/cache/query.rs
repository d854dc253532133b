//! Generic TTL query cache.
//!
//! [`QueryCache`] memoizes the result of an async producer under a
//! caller-supplied string key. Freshness is decided at read time: each
//! entry carries the instant it was stored, and a `get` compares that
//! against the *caller's* TTL. This keeps TTLs per call (a 5-minute query
//! and a 24-hour AI-generated insight can share one cache) and makes
//! expiry lazy — a stale entry sits in place until the next access
//! replaces it, exactly like the behavior the UI layer was built around.
//!
//! The store itself is moka's future cache with a capacity bound, so a
//! long-lived process with many distinct keys degrades to LRU eviction
//! instead of unbounded growth.
//!
//! # No request coalescing
//!
//! Two logically-concurrent `get` calls on a cold key each run their
//! producer; whichever resolves last wins the stored value. That is
//! acceptable for UI memoization. If this cache is ever reused in a
//! higher-concurrency context, add a single-flight guard (a map from key
//! to in-flight task) in front of the producer invocation.
//!
//! # Failure semantics
//!
//! A failing producer propagates its error verbatim and writes nothing;
//! any existing (stale) entry stays in place until a future successful
//! `get` or [`refetch`](QueryCache::refetch) replaces it.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache;
use tokio::time::Instant;

use crate::error::{LunaraError, Result};
use crate::telemetry;

/// Default TTL applied when neither the config nor the call specifies one.
const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Default maximum number of entries.
const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Configuration for a [`QueryCache`].
///
/// ```rust
/// # use lunara::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(1_000)
///     .default_ttl(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries before LRU eviction. Default: 10,000.
    pub max_entries: u64,
    /// TTL used by [`QueryCache::get`] when the call doesn't override it.
    /// Default: 5 minutes.
    pub default_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            default_ttl: DEFAULT_TTL,
        }
    }
}

impl CacheConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of entries.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }

    /// Set the default TTL.
    pub fn default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
}

/// Per-call options for [`QueryCache::get_with`].
///
/// `ttl` overrides the cache's default for this call only — long-lived
/// derived content (e.g. externally computed insights) typically passes
/// something like 24 hours while ordinary queries keep the default.
///
/// `enabled = false` bypasses the cache entirely: the producer still
/// runs, nothing is read or written. Whether to skip the call altogether
/// (e.g. "user not logged in") is the caller's decision, made before
/// reaching the cache.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Per-call TTL override.
    pub ttl: Option<Duration>,
    /// Whether this call participates in caching. Default: true.
    pub enabled: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            ttl: None,
            enabled: true,
        }
    }
}

impl QueryOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the TTL for this call.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Enable or disable cache participation for this call.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// A stored value and the instant it was stored.
#[derive(Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Keyed TTL memoization of async producer results.
///
/// Cheap to clone (clones share the underlying store). `tokio::time`
/// instants are used for freshness so TTL behavior is deterministic under
/// paused-time tests.
#[derive(Clone)]
pub struct QueryCache<V> {
    entries: Cache<String, CacheEntry<V>>,
    default_ttl: Duration,
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache from the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = Cache::builder()
            .max_capacity(config.max_entries)
            .support_invalidation_closures()
            .build();
        Self {
            entries,
            default_ttl: config.default_ttl,
        }
    }

    /// Memoized get with the cache's default TTL.
    ///
    /// See [`get_with`](Self::get_with).
    pub async fn get<F, Fut, E>(&self, key: &str, producer: F) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        self.get_with(key, &QueryOptions::default(), producer).await
    }

    /// Memoized get.
    ///
    /// Returns the stored value without invoking `producer` when an entry
    /// exists and is younger than the effective TTL. Otherwise runs
    /// `producer`; on success the value is stored (overwriting any stale
    /// entry) and returned, on failure the error propagates and the store
    /// is left untouched.
    pub async fn get_with<F, Fut, E>(
        &self,
        key: &str,
        options: &QueryOptions,
        producer: F,
    ) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        if !options.enabled {
            return producer().await;
        }
        let ttl = options.ttl.unwrap_or(self.default_ttl);
        if let Some(entry) = self.entries.get(key).await {
            if entry.stored_at.elapsed() < ttl {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                return Ok(entry.value);
            }
        }
        metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
        let value = producer().await?;
        self.store(key, value.clone()).await;
        Ok(value)
    }

    /// Unconditionally invalidate and repopulate `key`, ignoring TTL.
    ///
    /// For callers that know the underlying data just changed. On
    /// producer failure the key stays invalidated and the error
    /// propagates.
    pub async fn refetch<F, Fut, E>(&self, key: &str, producer: F) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        tracing::debug!(key, "refetching cache entry");
        metrics::counter!(telemetry::CACHE_REFETCHES_TOTAL).increment(1);
        self.entries.invalidate(key).await;
        let value = producer().await?;
        self.store(key, value.clone()).await;
        Ok(value)
    }

    /// Remove the entry for `key`. Idempotent.
    pub async fn invalidate(&self, key: &str) {
        metrics::counter!(telemetry::CACHE_INVALIDATIONS_TOTAL).increment(1);
        self.entries.invalidate(key).await;
    }

    /// Remove every entry whose key starts with `prefix`.
    ///
    /// Bulk invalidation for when a mutation affects a family of cached
    /// queries. Swept entries are hidden from reads immediately; the
    /// backing store reclaims them lazily.
    pub fn invalidate_prefix(&self, prefix: &str) -> Result<()> {
        tracing::debug!(prefix, "invalidating cache entries by prefix");
        metrics::counter!(telemetry::CACHE_INVALIDATIONS_TOTAL).increment(1);
        let prefix = prefix.to_string();
        self.entries
            .invalidate_entries_if(move |key, _| key.starts_with(&prefix))
            .map_err(|err| LunaraError::Cache(err.to_string()))?;
        Ok(())
    }

    /// Empty the cache. Intended for logout/session-reset boundaries.
    pub fn clear(&self) {
        tracing::debug!("clearing query cache");
        self.entries.invalidate_all();
    }

    /// Number of entries currently in the cache.
    ///
    /// Approximate while maintenance is pending, like the underlying
    /// store's entry count.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    async fn store(&self, key: &str, value: V) {
        let entry = CacheEntry {
            value,
            stored_at: Instant::now(),
        };
        self.entries.insert(key.to_string(), entry).await;
    }
}
