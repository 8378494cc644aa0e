use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::time::period::Period;
use super::isoweek::WeekKey;
use super::weekerror::WeekError;

/// Inclusive Monday..Sunday date range of one ISO week.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize)]
pub struct WeekRange {
    start: NaiveDate,
    end: NaiveDate
}

impl WeekRange {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Monday and Sunday of ISO week `week` of `iso_year`.
///
/// January 4th always lies in week 1, so week 1 starts on the Monday on or
/// before it; later weeks follow in steps of seven days.
pub fn week_range(iso_year: i32, week: u32) -> Result<WeekRange, WeekError> {
    let key = WeekKey::new(iso_year, week)?;
    let out_of_range = || WeekError::YearOutOfRange(iso_year);

    let jan_4 = NaiveDate::from_ymd_opt(key.iso_year(), 1, 4).ok_or_else(out_of_range)?;
    let back_to_monday = Period::days(1 - jan_4.weekday().number_from_monday() as i32);
    let week_one_monday = back_to_monday.checked_shift(jan_4).ok_or_else(out_of_range)?;

    let start = Period::weeks(key.week() as i32 - 1)
        .checked_shift(week_one_monday)
        .ok_or_else(out_of_range)?;
    let end = Period::days(6).checked_shift(start).ok_or_else(out_of_range)?;

    Ok(WeekRange { start, end })
}
