use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::time::utility::days_of_year;
use super::weekerror::WeekError;
use super::weekrange::{WeekRange, week_range};

/// An ISO-8601 week: the ISO week-year together with the week number.
///
/// The week-year is the calendar year of the week's Thursday, so it differs
/// from the calendar year for a few days around New Year. Keys order by
/// week-year first, then week.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekKey {
    iso_year: i32,
    week: u32
}

impl WeekKey {
    /// Validated constructor; `week` must exist in `iso_year`.
    pub fn new(iso_year: i32, week: u32) -> Result<WeekKey, WeekError> {
        let last_week = weeks_in_iso_year(iso_year)?;
        if !(1..=last_week).contains(&week) {
            return Err(WeekError::InvalidWeek { iso_year, week });
        }
        Ok(WeekKey { iso_year, week })
    }

    /// Moves `d` to the Thursday of its week (Monday = 1 … Sunday = 7,
    /// shift `4 - weekday`). The Thursday's year is the week-year and
    /// `floor(days since January 1 / 7) + 1` is the week.
    ///
    /// Only the date's calendar components are used, so the result does not
    /// depend on any time zone.
    pub fn from_date(d: NaiveDate) -> WeekKey {
        let iso_weekday = d.weekday().number_from_monday() as i32;

        let mut year = d.year();
        let mut thursday_ordinal0 = d.ordinal0() as i32 + 4 - iso_weekday;
        if thursday_ordinal0 < 0 {
            year -= 1;
            thursday_ordinal0 += days_of_year(year);
        } else if thursday_ordinal0 >= days_of_year(year) {
            thursday_ordinal0 -= days_of_year(year);
            year += 1;
        }

        WeekKey {
            iso_year: year,
            week: (thursday_ordinal0 / 7 + 1) as u32
        }
    }

    pub fn iso_year(&self) -> i32 {
        self.iso_year
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    /// Monday to Sunday of this week.
    pub fn range(&self) -> Result<WeekRange, WeekError> {
        week_range(self.iso_year, self.week)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.iso_year, self.week)
    }
}

impl From<NaiveDate> for WeekKey {
    fn from(d: NaiveDate) -> WeekKey {
        WeekKey::from_date(d)
    }
}

#[inline]
pub fn iso_week(d: NaiveDate) -> u32 {
    WeekKey::from_date(d).week()
}

#[inline]
pub fn iso_week_year(d: NaiveDate) -> i32 {
    WeekKey::from_date(d).iso_year()
}

/// 52 or 53. December 28th always falls in the last ISO week of its year.
pub fn weeks_in_iso_year(iso_year: i32) -> Result<u32, WeekError> {
    NaiveDate::from_ymd_opt(iso_year, 12, 28)
        .map(iso_week)
        .ok_or(WeekError::YearOutOfRange(iso_year))
}
