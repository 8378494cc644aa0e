use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::holiday::holidayrecord::{HolidayRecord, RawHoliday};
use super::isoweek::WeekKey;
use super::weekerror::WeekError;
use super::weekrange::WeekRange;

/// Styling hint for a highlighted week.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekIntensity {
    Single,
    Multiple
}

impl WeekIntensity {
    pub fn from_count(count: usize) -> WeekIntensity {
        if count > 1 {
            WeekIntensity::Multiple
        } else {
            WeekIntensity::Single
        }
    }
}

/// Number of holidays in one ISO week together with the week's dates.
///
/// Serialized as
/// `{"isoYear", "week", "weekStart", "weekEnd", "count", "intensity"}`.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekBucket {
    iso_year: i32,
    week: u32,
    week_start: NaiveDate,
    week_end: NaiveDate,
    count: usize,
    intensity: WeekIntensity
}

impl WeekBucket {
    fn new(key: WeekKey, range: WeekRange, count: usize) -> WeekBucket {
        WeekBucket {
            iso_year: key.iso_year(),
            week: key.week(),
            week_start: range.start(),
            week_end: range.end(),
            count,
            intensity: WeekIntensity::from_count(count)
        }
    }

    pub fn key(&self) -> WeekKey {
        WeekKey::from_date(self.week_start)
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn week_end(&self) -> NaiveDate {
        self.week_end
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn intensity(&self) -> WeekIntensity {
        self.intensity
    }
}

/// Holiday count per ISO week, keyed by (week-year, week).
pub fn count_by_week<'a, I>(holidays: I) -> BTreeMap<WeekKey, usize>
    where I: IntoIterator<Item = &'a HolidayRecord> {
    let mut counts = BTreeMap::new();
    for holiday in holidays {
        *counts.entry(WeekKey::from_date(holiday.date())).or_insert(0) += 1;
    }
    counts
}

/// One bucket per ISO week holding at least one holiday, ascending by week.
pub fn bucket_holidays(holidays: &[HolidayRecord]) -> Result<Vec<WeekBucket>, WeekError> {
    count_by_week(holidays)
        .into_iter()
        .map(|(key, count)| key.range().map(|range| WeekBucket::new(key, range, count)))
        .collect()
}

/// Like [`bucket_holidays`], for records whose dates are still text. The
/// first malformed date aborts the whole computation.
pub fn bucket_raw_holidays(raw_holidays: &[RawHoliday]) -> Result<Vec<WeekBucket>, WeekError> {
    let holidays = raw_holidays
        .iter()
        .cloned()
        .map(HolidayRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    bucket_holidays(&holidays)
}
