//! Cycle-phase prediction.
//!
//! Pure date arithmetic over a repeating cycle model: no I/O, no shared
//! state, safe to call repeatedly and concurrently. Callers inject the
//! reference date, which keeps every output deterministic and testable.
//!
//! # Two classification rules
//!
//! The phase windows come in two variants that agree for 28-day cycles and
//! drift apart as `length` moves away from 28:
//!
//! - [`phase_for_cycle_day`] anchors the ovulation window at absolute
//!   cycle days 14–16 regardless of length. This is the rule the app UI
//!   ships with and the one [`predict`] applies.
//! - [`phase_for_cycle_day_relative`] anchors the window at
//!   `length − 14`, consistent with how [`PhasePrediction::ovulation_date`]
//!   is derived from the next period date.
//!
//! Both are exposed deliberately; reconciling them is a product decision,
//! not something this module does silently.

use chrono::NaiveDate;

use crate::dates::{add_days, days_between};
use crate::error::{LunaraError, Result};
use crate::types::{CycleRecord, Phase, PhasePrediction};

/// Days between ovulation and the next period (fixed luteal assumption).
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Days before ovulation included in the fertile window.
pub const FERTILE_WINDOW_LEAD_DAYS: i64 = 5;

/// First cycle day of the absolute ovulation window.
const OVULATION_WINDOW_START: u32 = 14;

/// Last cycle day of the absolute ovulation window.
const OVULATION_WINDOW_END: u32 = 16;

/// Classify a cycle day using the absolute day-threshold rule.
///
/// Menstrual through `duration`, ovulation on days 14–16, luteal after
/// day 16, follicular in between. The ovulation window here ignores the
/// cycle length; see the module docs for the length-relative alternative.
pub fn phase_for_cycle_day(cycle_day: u32, duration: u32) -> Phase {
    if cycle_day <= duration {
        Phase::Menstrual
    } else if (OVULATION_WINDOW_START..=OVULATION_WINDOW_END).contains(&cycle_day) {
        Phase::Ovulation
    } else if cycle_day > OVULATION_WINDOW_END {
        Phase::Luteal
    } else {
        Phase::Follicular
    }
}

/// Classify a cycle day with the ovulation window anchored to the cycle
/// length.
///
/// The window starts at `length − 14` (clamped to at least day 1) and
/// spans three days, mirroring how the predicted ovulation *date* is
/// derived from the next period date. For a 28-day cycle this matches
/// [`phase_for_cycle_day`] exactly.
pub fn phase_for_cycle_day_relative(cycle_day: u32, duration: u32, length: u32) -> Phase {
    let window_start = length.saturating_sub(LUTEAL_PHASE_DAYS as u32).max(1);
    let window_end = window_start + (OVULATION_WINDOW_END - OVULATION_WINDOW_START);
    if cycle_day <= duration {
        Phase::Menstrual
    } else if (window_start..=window_end).contains(&cycle_day) {
        Phase::Ovulation
    } else if cycle_day > window_end {
        Phase::Luteal
    } else {
        Phase::Follicular
    }
}

/// Predict phase and window dates for `record` as of `today`.
///
/// Errors with [`LunaraError::InvalidRecord`] when the record starts in
/// the future; use [`predict_clamped`] where a defensive UI fallback is
/// preferred. Zero `length`/`duration` are substituted with the defaults
/// rather than rejected.
pub fn predict(record: &CycleRecord, today: NaiveDate) -> Result<PhasePrediction> {
    let days_since_start = days_between(record.start_date, today);
    if days_since_start < 0 {
        return Err(LunaraError::invalid(format!(
            "start date {} is after the reference date {today}",
            record.start_date
        )));
    }
    compute(record, today, days_since_start)
}

/// Defensive variant of [`predict`] for display paths.
///
/// A future start date clamps to cycle day 1 instead of failing, and a
/// record whose dates would overflow the calendar falls back to the
/// default 28-day model anchored at `today`. Always yields a prediction.
pub fn predict_clamped(record: &CycleRecord, today: NaiveDate) -> PhasePrediction {
    let days_since_start = days_between(record.start_date, today).max(0);
    compute(record, today, days_since_start)
        .or_else(|_| compute(&CycleRecord::new(today), today, 0))
        .unwrap_or_else(|_| {
            // today itself sits at the calendar edge; collapse every window
            // onto it rather than panic
            PhasePrediction {
                cycle_day: 1,
                phase: Phase::Menstrual,
                next_period_date: today,
                ovulation_date: today,
                fertile_window_start: today,
                fertile_window_end: today,
                days_until_period: 0,
                is_in_fertile_window: true,
            }
        })
}

/// Predict from the most recent record in `history` (by start date).
///
/// An empty history is [`LunaraError::NoCycleData`] — the normal state
/// for a new user, not a fault.
pub fn predict_latest(history: &[CycleRecord], today: NaiveDate) -> Result<PhasePrediction> {
    let latest = history
        .iter()
        .max_by_key(|record| record.start_date)
        .ok_or(LunaraError::NoCycleData)?;
    predict(latest, today)
}

fn compute(record: &CycleRecord, today: NaiveDate, days_since_start: i64) -> Result<PhasePrediction> {
    let length = record.effective_length();
    let duration = record.effective_duration();

    let cycle_day = (days_since_start % i64::from(length)) as u32 + 1;
    let phase = phase_for_cycle_day(cycle_day, duration);

    let overflow = || LunaraError::invalid("predicted dates fall outside the calendar range");
    let next_period_date =
        add_days(record.start_date, i64::from(length)).ok_or_else(overflow)?;
    let ovulation_date = add_days(next_period_date, -LUTEAL_PHASE_DAYS).ok_or_else(overflow)?;
    let fertile_window_start =
        add_days(ovulation_date, -FERTILE_WINDOW_LEAD_DAYS).ok_or_else(overflow)?;
    let fertile_window_end = ovulation_date;

    Ok(PhasePrediction {
        cycle_day,
        phase,
        next_period_date,
        ovulation_date,
        fertile_window_start,
        fertile_window_end,
        days_until_period: days_between(today, next_period_date),
        is_in_fertile_window: fertile_window_start <= today && today <= fertile_window_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(phase_for_cycle_day(1, 5), Phase::Menstrual);
        assert_eq!(phase_for_cycle_day(5, 5), Phase::Menstrual);
        assert_eq!(phase_for_cycle_day(6, 5), Phase::Follicular);
        assert_eq!(phase_for_cycle_day(13, 5), Phase::Follicular);
        assert_eq!(phase_for_cycle_day(14, 5), Phase::Ovulation);
        assert_eq!(phase_for_cycle_day(16, 5), Phase::Ovulation);
        assert_eq!(phase_for_cycle_day(17, 5), Phase::Luteal);
        assert_eq!(phase_for_cycle_day(28, 5), Phase::Luteal);
    }

    #[test]
    fn menstrual_takes_precedence_over_ovulation_window() {
        // Pathological but representable: flow long enough to reach day 14
        assert_eq!(phase_for_cycle_day(14, 15), Phase::Menstrual);
    }

    #[test]
    fn relative_rule_matches_absolute_at_28_days() {
        for day in 1..=28 {
            assert_eq!(
                phase_for_cycle_day(day, 5),
                phase_for_cycle_day_relative(day, 5, 28),
                "day {day}"
            );
        }
    }

    #[test]
    fn relative_rule_shifts_with_length() {
        // 35-day cycle: relative window is days 21–23
        assert_eq!(phase_for_cycle_day_relative(21, 5, 35), Phase::Ovulation);
        assert_eq!(phase_for_cycle_day_relative(14, 5, 35), Phase::Follicular);
        // absolute rule still calls day 14 ovulation
        assert_eq!(phase_for_cycle_day(14, 5), Phase::Ovulation);
    }

    #[test]
    fn relative_rule_clamps_short_lengths() {
        // length 10 would anchor the window before day 1; it clamps to 1..=3
        assert_eq!(phase_for_cycle_day_relative(4, 0, 10), Phase::Luteal);
        assert_eq!(phase_for_cycle_day_relative(1, 0, 10), Phase::Ovulation);
        assert_eq!(phase_for_cycle_day_relative(1, 2, 10), Phase::Menstrual);
    }

    #[test]
    fn cycle_day_wraps_past_one_cycle() {
        // 30 days after a 28-day cycle start → day 3 of the next modeled cycle
        let record = CycleRecord::new(date(2024, 1, 1));
        let prediction = predict(&record, date(2024, 1, 31)).unwrap();
        assert_eq!(prediction.cycle_day, 3);
        // next period stays anchored to the logged start, not rolled forward
        assert_eq!(prediction.next_period_date, date(2024, 1, 29));
        assert_eq!(prediction.days_until_period, -2);
    }

    #[test]
    fn cycle_day_stays_in_range() {
        let record = CycleRecord::new(date(2024, 1, 1)).length(28);
        for offset in 0..90 {
            let today = add_days(date(2024, 1, 1), offset).unwrap();
            let prediction = predict(&record, today).unwrap();
            assert!((1..=28).contains(&prediction.cycle_day));
        }
    }

    #[test]
    fn future_start_is_invalid() {
        let record = CycleRecord::new(date(2024, 2, 1));
        assert!(matches!(
            predict(&record, date(2024, 1, 1)),
            Err(LunaraError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn clamped_variant_treats_future_start_as_day_one() {
        let record = CycleRecord::new(date(2024, 2, 1));
        let prediction = predict_clamped(&record, date(2024, 1, 1));
        assert_eq!(prediction.cycle_day, 1);
        assert_eq!(prediction.phase, Phase::Menstrual);
    }

    #[test]
    fn clamped_variant_survives_calendar_overflow() {
        let record = CycleRecord::new(NaiveDate::MAX);
        let prediction = predict_clamped(&record, NaiveDate::MAX);
        assert_eq!(prediction.cycle_day, 1);
    }

    #[test]
    fn zero_length_uses_default_model() {
        let record = CycleRecord::new(date(2024, 1, 1)).length(0);
        let prediction = predict(&record, date(2024, 1, 3)).unwrap();
        assert_eq!(prediction.next_period_date, date(2024, 1, 29));
    }

    #[test]
    fn latest_record_wins() {
        let history = [
            CycleRecord::new(date(2023, 12, 1)),
            CycleRecord::new(date(2024, 1, 1)),
            CycleRecord::new(date(2023, 11, 3)),
        ];
        let prediction = predict_latest(&history, date(2024, 1, 3)).unwrap();
        assert_eq!(prediction.cycle_day, 3);
    }

    #[test]
    fn empty_history_is_no_cycle_data() {
        assert!(matches!(
            predict_latest(&[], date(2024, 1, 3)),
            Err(LunaraError::NoCycleData)
        ));
    }
}
