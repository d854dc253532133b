//! Calendar-day arithmetic helpers.
//!
//! The prediction model works in whole days on naive calendar dates; time
//! of day and timezone are the caller's concern. These helpers keep the
//! signed-difference and checked-addition idioms in one place.

use chrono::{NaiveDate, TimeDelta};

/// Signed whole-day difference `to − from`.
///
/// Negative when `to` precedes `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Add a signed number of days to a date.
///
/// Returns `None` if the result falls outside chrono's representable
/// calendar range.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::days(days))
}
