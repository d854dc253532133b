//! Cycle-history collaborator seam.
//!
//! The core never talks to storage directly. A [`CycleHistory`]
//! implementation (Supabase-backed in the app, in-memory in tests) hands
//! over the most recent logged record, and [`CyclePredictor`] turns it
//! into a [`PhasePrediction`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{LunaraError, Result};
use crate::types::{CycleRecord, PhasePrediction};
use crate::{predictor, telemetry};

/// Provider of the user's cycle history.
///
/// `latest_record` returns the most recent record by start date, or
/// `Ok(None)` when nothing has been logged yet — a normal state for a
/// new user, not a failure.
#[async_trait]
pub trait CycleHistory: Send + Sync {
    /// Most recent cycle record, if any.
    async fn latest_record(&self) -> Result<Option<CycleRecord>>;
}

/// Prediction front over a [`CycleHistory`] provider.
///
/// Thin by design: fetches the latest record, delegates to the pure
/// [`predictor`](crate::predictor) functions, and emits prediction
/// metrics. Cheap to clone.
#[derive(Clone)]
pub struct CyclePredictor {
    history: Arc<dyn CycleHistory>,
}

impl CyclePredictor {
    /// Create a predictor over the given history provider.
    pub fn new(history: Arc<dyn CycleHistory>) -> Self {
        Self { history }
    }

    /// Predict the current phase as of `today`.
    ///
    /// Returns [`LunaraError::NoCycleData`] when the provider has no
    /// record. Callers inject `today` so results stay deterministic under
    /// test; production callers pass the current local date.
    pub async fn current(&self, today: NaiveDate) -> Result<PhasePrediction> {
        let record = self.history.latest_record().await?;
        let result = match record {
            Some(record) => predictor::predict(&record, today),
            None => Err(LunaraError::NoCycleData),
        };
        let outcome = match &result {
            Ok(_) => "ok",
            Err(LunaraError::NoCycleData) => "no_data",
            Err(_) => "invalid",
        };
        metrics::counter!(telemetry::PREDICTIONS_TOTAL, "outcome" => outcome).increment(1);
        result
    }
}
