use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use super::super::period::Period;
use super::super::utility::days_of_month;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        let Some(end_of_month) = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month)) else {
            return holiday_set;
        };

        let days_back = (end_of_month.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;

        holiday_set.insert(end_of_month - Period::days(days_back as i32));
        holiday_set
    }
}
