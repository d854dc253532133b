//! Lunara error types

/// Lunara error types
#[derive(Debug, thiserror::Error)]
pub enum LunaraError {
    /// No cycle has been recorded yet.
    ///
    /// This is an expected state, not a fault: a new user has no history.
    /// Callers should render it distinctly (e.g. prompt to log the first
    /// period) rather than treat it as a failure.
    #[error("no cycle data recorded")]
    NoCycleData,

    /// A cycle record that cannot be predicted from, even after
    /// conservative defaulting (e.g. start date in the future, or a date
    /// outside the supported calendar range).
    #[error("invalid cycle record: {reason}")]
    InvalidRecord { reason: String },

    /// Internal cache maintenance failure.
    ///
    /// Producer failures are NOT wrapped here — [`QueryCache::get`](crate::QueryCache::get)
    /// is generic over the producer's error type and propagates it verbatim.
    #[error("cache error: {0}")]
    Cache(String),
}

impl LunaraError {
    /// Shorthand for an [`InvalidRecord`](LunaraError::InvalidRecord) with
    /// the given reason.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LunaraError::InvalidRecord {
            reason: reason.into(),
        }
    }
}

/// Result type alias for Lunara operations
pub type Result<T> = std::result::Result<T, LunaraError>;
