//! Lunara - cycle prediction and query caching core
//!
//! The extracted core of a cycle-tracking app: a pure cycle-phase
//! predictor over a repeating cycle model, and a generic TTL query cache
//! that UI widgets use to memoize fetches and derived values. The two are
//! independent — the predictor never touches the cache, and the cache
//! knows nothing about cycles.
//!
//! # Prediction example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use lunara::{CycleRecord, Phase, predictor};
//!
//! let record = CycleRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//!
//! let prediction = predictor::predict(&record, today)?;
//! assert_eq!(prediction.cycle_day, 3);
//! assert_eq!(prediction.phase, Phase::Menstrual);
//! assert_eq!(prediction.days_until_period, 26);
//! # Ok::<(), lunara::LunaraError>(())
//! ```
//!
//! # Caching example
//!
//! ```rust,no_run
//! use lunara::{CacheConfig, QueryCache};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), std::io::Error> {
//!     let cache: QueryCache<String> = QueryCache::new(&CacheConfig::new());
//!
//!     // Second call within the TTL returns the stored value without
//!     // running the producer again.
//!     let value = cache
//!         .get("user:42:insights", || async { fetch_insights().await })
//!         .await?;
//!     println!("{value}");
//!     Ok(())
//! }
//! # async fn fetch_insights() -> Result<String, std::io::Error> { Ok(String::new()) }
//! ```

pub mod cache;
pub mod dates;
pub mod error;
pub mod history;
pub mod predictor;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheConfig, QueryCache, QueryOptions};
pub use error::{LunaraError, Result};
pub use history::{CycleHistory, CyclePredictor};

// Re-export all types
pub use types::{
    CycleRecord, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_DURATION, MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH,
    Phase, PhasePrediction,
};
