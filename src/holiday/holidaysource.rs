use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::holiday::holidayrecord::HolidayRecord;
use crate::manager::manager::FrozenManager;
use crate::time::calendar::holidaycalendar::HolidayCalendar;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidaySourceError {
    #[error("no holidays found for country '{country}' in {year}")]
    NoData {
        country: String,
        year: i32
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CountryInfo {
    pub code: String,
    pub name: String
}

/// Where dated holidays come from.
///
/// An unknown country and a country without holidays in `year` are both
/// reported as [`HolidaySourceError::NoData`].
pub trait HolidaySource: Send + Sync {
    fn get_holidays(&self, country_code: &str, year: i32) -> Result<Vec<HolidayRecord>, HolidaySourceError>;

    /// Supported countries, ordered by code.
    fn countries(&self) -> Vec<CountryInfo>;
}

/// Country codes are matched case-insensitively, ignoring surrounding blanks.
pub fn normalize_country_code(country_code: &str) -> String {
    country_code.trim().to_ascii_uppercase()
}

/// [`HolidaySource`] backed by the configured holiday calendars, one per
/// country code.
pub struct CalendarHolidaySource {
    calendars: FrozenManager<dyn HolidayCalendar + Send + Sync>
}

impl CalendarHolidaySource {
    pub fn new(calendars: FrozenManager<dyn HolidayCalendar + Send + Sync>) -> CalendarHolidaySource {
        CalendarHolidaySource { calendars }
    }
}

impl HolidaySource for CalendarHolidaySource {
    fn get_holidays(&self, country_code: &str, year: i32) -> Result<Vec<HolidayRecord>, HolidaySourceError> {
        let country = normalize_country_code(country_code);
        let no_data = || HolidaySourceError::NoData { country: country.clone(), year };

        let calendar = self.calendars.get(&country).map_err(|err| {
            debug!(%err, "unknown country code");
            no_data()
        })?;
        let holidays = calendar.holidays(year);
        if holidays.is_empty() {
            return Err(no_data());
        }
        Ok(holidays)
    }

    fn countries(&self) -> Vec<CountryInfo> {
        self.calendars
            .names()
            .into_iter()
            .filter_map(|code| {
                self.calendars.get(code).ok().map(|calendar| CountryInfo {
                    code: code.to_owned(),
                    name: calendar.display_name().to_owned()
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::manager::manager::ManagerBuilder;
    use crate::time::calendar::simplecalendar::SimpleCalendar;

    fn source() -> CalendarHolidaySource {
        let mut builder: ManagerBuilder<dyn HolidayCalendar + Send + Sync> = ManagerBuilder::new();
        let one_off = HolidayRecord::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), "Only Once");
        builder.insert("ZZ".to_owned(), Arc::new(SimpleCalendar::new("Zedland", vec![], vec![one_off], vec![])));
        CalendarHolidaySource::new(builder.freeze())
    }

    #[test]
    fn country_codes_are_normalized() {
        let holidays = source().get_holidays(" zz ", 2024).unwrap();
        assert_eq!(holidays.len(), 1);
    }

    #[test]
    fn unknown_country_has_no_data() {
        assert_eq!(
            source().get_holidays("QQ", 2024),
            Err(HolidaySourceError::NoData { country: "QQ".to_owned(), year: 2024 })
        );
    }

    #[test]
    fn empty_year_has_no_data() {
        assert!(source().get_holidays("ZZ", 2025).is_err());
    }

    #[test]
    fn countries_are_listed_with_names() {
        assert_eq!(source().countries(), vec![CountryInfo { code: "ZZ".to_owned(), name: "Zedland".to_owned() }]);
    }
}
