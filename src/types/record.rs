//! Observed cycle records and their validation rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LunaraError, Result};

/// Cycle length assumed when none was recorded (days).
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

/// Menstrual flow duration assumed when none was recorded (days).
pub const DEFAULT_PERIOD_DURATION: u32 = 5;

/// Shortest cycle length accepted by strict validation (days).
pub const MIN_CYCLE_LENGTH: u32 = 21;

/// Longest cycle length accepted by strict validation (days).
pub const MAX_CYCLE_LENGTH: u32 = 45;

/// One observed menstrual cycle, as logged by the user.
///
/// Records are created and updated by the data-entry layer; the predictor
/// only ever reads the most recent one (by `start_date` descending) and
/// never mutates it.
///
/// `length` and `duration` default when absent from serialized input, so a
/// record that only carries a start date deserializes to the standard
/// 28-day / 5-day model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// First day of menstrual flow for this cycle.
    pub start_date: NaiveDate,
    /// Total days in the cycle.
    #[serde(default = "default_length")]
    pub length: u32,
    /// Days of menstrual flow within the cycle.
    #[serde(default = "default_duration")]
    pub duration: u32,
}

fn default_length() -> u32 {
    DEFAULT_CYCLE_LENGTH
}

fn default_duration() -> u32 {
    DEFAULT_PERIOD_DURATION
}

impl CycleRecord {
    /// Create a record with the default length (28) and duration (5).
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            length: DEFAULT_CYCLE_LENGTH,
            duration: DEFAULT_PERIOD_DURATION,
        }
    }

    /// Set the cycle length.
    pub fn length(mut self, days: u32) -> Self {
        self.length = days;
        self
    }

    /// Set the flow duration.
    pub fn duration(mut self, days: u32) -> Self {
        self.duration = days;
        self
    }

    /// Cycle length with the zero guard applied.
    ///
    /// A stored `length` of 0 (absent or corrupt input) falls back to the
    /// default 28 rather than poisoning the modulo arithmetic downstream.
    pub fn effective_length(&self) -> u32 {
        if self.length == 0 {
            DEFAULT_CYCLE_LENGTH
        } else {
            self.length
        }
    }

    /// Flow duration with guards applied: 0 falls back to the default 5,
    /// and the result never exceeds [`effective_length`](Self::effective_length).
    pub fn effective_duration(&self) -> u32 {
        let duration = if self.duration == 0 {
            DEFAULT_PERIOD_DURATION
        } else {
            self.duration
        };
        duration.min(self.effective_length())
    }

    /// Strict data-entry validation.
    ///
    /// The predictor itself is defensive and only needs the effective-value
    /// guards above; this is the stricter rule set applied when the user
    /// logs or edits a record:
    ///
    /// - `start_date` must not be after `today`
    /// - `21 ≤ length ≤ 45`
    /// - `1 ≤ duration ≤ length`
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.start_date > today {
            return Err(LunaraError::invalid(format!(
                "start date {} is in the future",
                self.start_date
            )));
        }
        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&self.length) {
            return Err(LunaraError::invalid(format!(
                "cycle length {} outside {MIN_CYCLE_LENGTH}..={MAX_CYCLE_LENGTH}",
                self.length
            )));
        }
        if self.duration == 0 || self.duration > self.length {
            return Err(LunaraError::invalid(format!(
                "flow duration {} outside 1..={}",
                self.duration, self.length
            )));
        }
        Ok(())
    }
}
