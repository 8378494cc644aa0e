use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::week::weekerror::WeekError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One dated public holiday.
///
/// Serializes as `{"date": "YYYY-MM-DD", "name": "..."}`. Records order by
/// date, then name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Serialize)]
pub struct HolidayRecord {
    date: NaiveDate,
    name: String
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> HolidayRecord {
        HolidayRecord { date, name: name.into() }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A holiday as received over the wire, before its date has been checked.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct RawHoliday {
    pub date: String,
    pub name: String
}

impl RawHoliday {
    pub fn new(date: impl Into<String>, name: impl Into<String>) -> RawHoliday {
        RawHoliday { date: date.into(), name: name.into() }
    }
}

impl TryFrom<RawHoliday> for HolidayRecord {
    type Error = WeekError;

    fn try_from(raw: RawHoliday) -> Result<HolidayRecord, WeekError> {
        match parse_iso_date(&raw.date) {
            Some(date) => Ok(HolidayRecord { date, name: raw.name }),
            None => Err(WeekError::MalformedDate { date: raw.date, name: raw.name })
        }
    }
}

/// Strict `YYYY-MM-DD`: four-digit year, two-digit month and day, nothing
/// before or after.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes.iter().enumerate().all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}
