//! Derived prediction values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the four segments of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Menstrual flow days at the start of the cycle.
    Menstrual,
    /// Between the end of flow and the ovulation window.
    Follicular,
    /// The estimated ovulation window.
    Ovulation,
    /// From the end of the ovulation window until the next period.
    Luteal,
}

impl Phase {
    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menstrual => "menstrual",
            Phase::Follicular => "follicular",
            Phase::Ovulation => "ovulation",
            Phase::Luteal => "luteal",
        }
    }
}

/// A prediction derived from one [`CycleRecord`](crate::CycleRecord) and a
/// reference date.
///
/// Ephemeral by design: computed fresh on each call and never persisted by
/// the core. The shape is JSON-compatible so predictions can flow through
/// component state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePrediction {
    /// 1-based day offset within the current cycle, in `[1, length]`.
    pub cycle_day: u32,
    /// Phase classified from `cycle_day` (see [`phase_for_cycle_day`](crate::predictor::phase_for_cycle_day)).
    pub phase: Phase,
    /// `start_date + length` days; anchored to the most recent logged
    /// start, never rolled forward past missed periods.
    pub next_period_date: NaiveDate,
    /// `next_period_date − 14` days.
    pub ovulation_date: NaiveDate,
    /// `ovulation_date − 5` days.
    pub fertile_window_start: NaiveDate,
    /// Equal to `ovulation_date` (the window is 6 days inclusive).
    pub fertile_window_end: NaiveDate,
    /// Signed days until `next_period_date`; ≤ 0 means due or overdue.
    pub days_until_period: i64,
    /// Whether the reference date falls inside the fertile window,
    /// bounds inclusive.
    pub is_in_fertile_window: bool,
}
