use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use holidayweeks::holiday::holidayrecord::{HolidayRecord, RawHoliday};
use holidayweeks::time::week::isoweek::{WeekKey, iso_week, iso_week_year, weeks_in_iso_year};
use holidayweeks::time::week::weekbucket::{WeekIntensity, bucket_holidays, bucket_raw_holidays};
use holidayweeks::time::week::weekrange::week_range;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn holiday(y: i32, m: u32, d: u32, name: &str) -> HolidayRecord {
    HolidayRecord::new(ymd(y, m, d), name)
}

// Days from 1600-01-01 to 2400-12-31
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..292_558).prop_map(|offset| ymd(1600, 1, 1) + chrono::Duration::days(offset))
}

proptest! {
    #[test]
    fn week_number_is_between_1_and_53(d in any_date()) {
        let week = iso_week(d);
        prop_assert!((1..=53).contains(&week));
    }

    #[test]
    fn week_range_contains_the_date(d in any_date()) {
        let range = week_range(iso_week_year(d), iso_week(d)).unwrap();
        prop_assert!(range.contains(d));
        prop_assert_eq!(range.start().weekday(), Weekday::Mon);
        prop_assert_eq!(range.end().weekday(), Weekday::Sun);
        prop_assert_eq!((range.end() - range.start()).num_days(), 6);
    }

    #[test]
    fn agrees_with_chrono_iso_week(d in any_date()) {
        let expected = d.iso_week();
        let key = WeekKey::from_date(d);
        prop_assert_eq!(key.iso_year(), expected.year());
        prop_assert_eq!(key.week(), expected.week());
    }

    #[test]
    fn aggregation_does_not_depend_on_input_order(
        dates in proptest::collection::vec(any_date(), 0..40)
    ) {
        let holidays: Vec<HolidayRecord> = dates.iter().map(|d| HolidayRecord::new(*d, "h")).collect();
        let mut reversed = holidays.clone();
        reversed.reverse();

        let first = bucket_holidays(&holidays).unwrap();
        let second = bucket_holidays(&reversed).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.iter().map(|b| b.count()).sum::<usize>(), holidays.len());
        prop_assert!(first.iter().all(|b| b.count() >= 1));
    }
}

#[test]
fn fixed_points() {
    assert_eq!((iso_week(ymd(2024, 1, 1)), iso_week_year(ymd(2024, 1, 1))), (1, 2024));
    assert_eq!((iso_week(ymd(2023, 1, 1)), iso_week_year(ymd(2023, 1, 1))), (52, 2022));
    assert_eq!((iso_week(ymd(2024, 12, 30)), iso_week_year(ymd(2024, 12, 30))), (1, 2025));
}

#[test]
fn first_week_of_2024_range() {
    let range = week_range(2024, 1).unwrap();
    assert_eq!((range.start(), range.end()), (ymd(2024, 1, 1), ymd(2024, 1, 7)));
}

#[test]
fn holidays_in_the_same_week_are_counted_together() {
    let buckets = bucket_holidays(&[
        holiday(2024, 1, 1, "New Year's Day"),
        holiday(2024, 1, 3, "Other"),
    ]).unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].count(), 2);
    assert_eq!((buckets[0].week_start(), buckets[0].week_end()), (ymd(2024, 1, 1), ymd(2024, 1, 7)));
}

#[test]
fn year_boundary_buckets_key_on_iso_year() {
    // 2024-12-30 (Monday) and 2025-01-02 (Thursday) are both in 2025-W01
    let buckets = bucket_holidays(&[
        holiday(2024, 12, 30, "Year End"),
        holiday(2025, 1, 2, "Year Start"),
    ]).unwrap();
    assert_eq!(buckets.len(), 1);
    let bucket = &buckets[0];
    assert_eq!((bucket.key().iso_year(), bucket.key().week()), (2025, 1));
    assert_eq!(bucket.count(), 2);
    assert_eq!((bucket.week_start(), bucket.week_end()), (ymd(2024, 12, 30), ymd(2025, 1, 5)));
}

#[test]
fn year_boundary_does_not_merge_different_weeks() {
    // 2024-12-29 is the Sunday closing 2024-W52
    let buckets = bucket_holidays(&[
        holiday(2024, 12, 29, "Sunday"),
        holiday(2024, 12, 30, "Monday"),
    ]).unwrap();
    let keys: Vec<String> = buckets.iter().map(|b| b.key().to_string()).collect();
    assert_eq!(keys, vec!["2024-W52", "2025-W01"]);
    assert!(buckets.iter().all(|b| b.intensity() == WeekIntensity::Single));
}

#[test]
fn aggregation_is_idempotent() {
    let holidays = [
        holiday(2025, 4, 18, "Good Friday"),
        holiday(2025, 4, 21, "Easter Monday"),
        holiday(2025, 12, 25, "Christmas Day"),
        holiday(2025, 12, 26, "Boxing Day"),
    ];
    let first: HashSet<_> = bucket_holidays(&holidays).unwrap().into_iter().collect();
    let second: HashSet<_> = bucket_holidays(&holidays).unwrap().into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn raw_holidays_are_bucketed_after_parsing() {
    let buckets = bucket_raw_holidays(&[
        RawHoliday::new("2026-12-31", "New Year's Eve"),
        RawHoliday::new("2027-01-01", "New Year's Day"),
    ]).unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].key().to_string(), "2026-W53");
    assert_eq!(weeks_in_iso_year(2026), Ok(53));
}

#[test]
fn raw_holidays_with_bad_dates_are_rejected() {
    assert!(bucket_raw_holidays(&[RawHoliday::new("31.12.2026", "New Year's Eve")]).is_err());
    assert_eq!(bucket_raw_holidays(&[]), Ok(vec![]));
}
