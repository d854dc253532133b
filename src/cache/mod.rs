//! Caching subsystem.
//!
//! One generic cache, [`QueryCache`] — keyed memoization of asynchronous
//! producer results with per-call TTL and explicit invalidation. UI
//! widgets use it to avoid re-running a fetch (or an expensive derived
//! computation) within a bounded freshness window.
//!
//! Caches are explicitly instantiated and injected; there is no hidden
//! process-wide singleton. A caller that wants one cache scope per
//! session creates one per session, and isolated tests create their own.
//! Keys are opaque strings and the cache does not namespace them —
//! callers sharing an instance across unrelated data are responsible for
//! prefixing (e.g. including a user id), which also makes
//! [`QueryCache::invalidate_prefix`] the natural bulk-invalidation tool.

pub mod query;

pub use query::{CacheConfig, QueryCache, QueryOptions};
