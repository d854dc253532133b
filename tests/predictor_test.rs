//! Tests for the pure prediction functions — worked scenarios and
//! date-arithmetic identities.

use chrono::NaiveDate;
use lunara::dates::{add_days, days_between};
use lunara::predictor::{predict, predict_clamped, predict_latest};
use lunara::{CycleRecord, LunaraError, Phase};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn january_record() -> CycleRecord {
    CycleRecord::new(date(2024, 1, 1)).length(28).duration(5)
}

#[test]
fn worked_example_day_three() {
    let prediction = predict(&january_record(), date(2024, 1, 3)).unwrap();

    assert_eq!(prediction.cycle_day, 3);
    assert_eq!(prediction.phase, Phase::Menstrual);
    assert_eq!(prediction.next_period_date, date(2024, 1, 29));
    assert_eq!(prediction.ovulation_date, date(2024, 1, 15));
    assert_eq!(prediction.fertile_window_start, date(2024, 1, 10));
    assert_eq!(prediction.fertile_window_end, date(2024, 1, 15));
    assert_eq!(prediction.days_until_period, 26);
    assert!(!prediction.is_in_fertile_window);
}

#[test]
fn mid_window_date_is_fertile() {
    let prediction = predict(&january_record(), date(2024, 1, 12)).unwrap();
    assert!(prediction.is_in_fertile_window);
}

#[test]
fn fertile_window_bounds_are_inclusive() {
    let record = january_record();

    // exactly at the window edges
    assert!(predict(&record, date(2024, 1, 10)).unwrap().is_in_fertile_window);
    assert!(predict(&record, date(2024, 1, 15)).unwrap().is_in_fertile_window);

    // one day outside either edge
    assert!(!predict(&record, date(2024, 1, 9)).unwrap().is_in_fertile_window);
    assert!(!predict(&record, date(2024, 1, 16)).unwrap().is_in_fertile_window);
}

#[test]
fn next_period_is_start_plus_length() {
    for length in [21u32, 28, 35, 45] {
        let record = CycleRecord::new(date(2024, 3, 10)).length(length);
        let prediction = predict(&record, date(2024, 3, 12)).unwrap();
        assert_eq!(
            prediction.next_period_date,
            add_days(date(2024, 3, 10), i64::from(length)).unwrap()
        );
    }
}

#[test]
fn fertile_window_spans_six_days_ending_at_ovulation() {
    for length in [21u32, 28, 35, 45] {
        let record = CycleRecord::new(date(2024, 3, 10)).length(length);
        let prediction = predict(&record, date(2024, 3, 12)).unwrap();

        assert_eq!(prediction.fertile_window_end, prediction.ovulation_date);
        assert_eq!(
            days_between(prediction.fertile_window_start, prediction.ovulation_date),
            5
        );
        assert_eq!(
            days_between(prediction.ovulation_date, prediction.next_period_date),
            14
        );
    }
}

#[test]
fn prediction_is_pure() {
    let record = january_record();
    let a = predict(&record, date(2024, 1, 12)).unwrap();
    let b = predict(&record, date(2024, 1, 12)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn overdue_period_yields_negative_days() {
    let prediction = predict(&january_record(), date(2024, 2, 2)).unwrap();
    assert!(prediction.days_until_period < 0);
    assert_eq!(prediction.days_until_period, -4);
}

#[test]
fn zero_length_substitutes_default() {
    let record = CycleRecord::new(date(2024, 1, 1)).length(0);
    let prediction = predict(&record, date(2024, 1, 3)).unwrap();
    assert_eq!(prediction.next_period_date, date(2024, 1, 29));
    assert_eq!(prediction.cycle_day, 3);
}

#[test]
fn future_start_fails_strict_but_not_clamped() {
    let record = CycleRecord::new(date(2024, 2, 1));

    assert!(matches!(
        predict(&record, date(2024, 1, 20)),
        Err(LunaraError::InvalidRecord { .. })
    ));

    let clamped = predict_clamped(&record, date(2024, 1, 20));
    assert_eq!(clamped.cycle_day, 1);
}

#[test]
fn latest_of_many_records_is_used() {
    let history = vec![
        CycleRecord::new(date(2023, 11, 5)),
        CycleRecord::new(date(2024, 1, 1)),
        CycleRecord::new(date(2023, 12, 3)),
    ];
    let prediction = predict_latest(&history, date(2024, 1, 3)).unwrap();
    assert_eq!(prediction.next_period_date, date(2024, 1, 29));
}

#[test]
fn empty_history_reports_no_cycle_data() {
    assert!(matches!(
        predict_latest(&[], date(2024, 1, 3)),
        Err(LunaraError::NoCycleData)
    ));
}

#[test]
fn prediction_serializes_to_flat_json() {
    let prediction = predict(&january_record(), date(2024, 1, 3)).unwrap();
    let json = serde_json::to_value(&prediction).unwrap();

    assert_eq!(json["cycle_day"], 3);
    assert_eq!(json["phase"], "menstrual");
    assert_eq!(json["next_period_date"], "2024-01-29");
    assert_eq!(json["days_until_period"], 26);
    assert_eq!(json["is_in_fertile_window"], false);
}
