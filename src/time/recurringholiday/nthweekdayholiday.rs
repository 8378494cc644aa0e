use std::collections::HashSet;

use chrono::{
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        // a fifth weekday does not exist in every month
        if let Some(date) = NaiveDate::from_weekday_of_month_opt(
            year,
            self.month,
            self.weekday,
            self.n
        ) {
            holiday_set.insert(date);
        }

        holiday_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thanksgiving_is_fourth_thursday_of_november() {
        let h = NthWeekdayHoliday::new(11, 4, Weekday::Thu).unwrap();
        assert_eq!(h.get_holiday(2024), HashSet::from([NaiveDate::from_ymd_opt(2024, 11, 28).unwrap()]));
        assert_eq!(h.get_holiday(2025), HashSet::from([NaiveDate::from_ymd_opt(2025, 11, 27).unwrap()]));
    }

    #[test]
    fn missing_fifth_weekday_yields_nothing() {
        // February 2025 has only four Mondays
        let h = NthWeekdayHoliday::new(2, 5, Weekday::Mon).unwrap();
        assert!(h.get_holiday(2025).is_empty());
    }

    #[test]
    fn out_of_range_arguments_are_rejected() {
        assert!(NthWeekdayHoliday::new(0, 1, Weekday::Mon).is_none());
        assert!(NthWeekdayHoliday::new(5, 6, Weekday::Mon).is_none());
    }
}
