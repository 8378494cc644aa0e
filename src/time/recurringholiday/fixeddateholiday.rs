use std::collections::{HashMap, HashSet};

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum YearBoundaryCheck {
    // next year's holiday may be observed on the last days of this year
    MayShiftToPreviousYear = 1,
    // last year's holiday may be observed on the first days of this year
    MayShiftToNextYear = -1,
    None
}

#[derive(Clone, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    weekend_adjustment_rules: WeekendAdjustmentRule,
    boundary_check: YearBoundaryCheck
}

impl FixedDateHoliday {
    /// Returns `None` when `month`/`day` never forms a date (Feb 29 is
    /// accepted and simply skipped in common years).
    pub fn new(month: u32, day: u32, weekend_adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Option<FixedDateHoliday> {
        NaiveDate::from_ymd_opt(2000, month, day)?;

        let weekend_adjustment_rules = WeekendAdjustmentRule::new(weekend_adjustment_map);
        let max_shift = weekend_adjustment_rules.max_shift();
        let boundary_check = if max_shift > 0 {
            if month == 1 && day <= max_shift {
                YearBoundaryCheck::MayShiftToPreviousYear
            } else if month == 12 && day > 31 - max_shift {
                YearBoundaryCheck::MayShiftToNextYear
            } else {
                YearBoundaryCheck::None
            }
        } else {
            YearBoundaryCheck::None
        };

        Some(FixedDateHoliday {
            month,
            day,
            weekend_adjustment_rules,
            boundary_check
        })
    }

    fn get_holiday_impl(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .and_then(|d| self.weekend_adjustment_rules.adjust(d))
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        if let Some(d1) = self.get_holiday_impl(year) {
            if d1.year() == year {
                holiday_set.insert(d1);
            }
        }

        if self.boundary_check != YearBoundaryCheck::None {
            // no neighbouring year past i32's range
            let neighbour = year.checked_add(self.boundary_check as i32);
            if let Some(d2) = neighbour.and_then(|y| self.get_holiday_impl(y)) {
                if d2.year() == year {
                    holiday_set.insert(d2);
                }
            }
        }

        holiday_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unadjusted_date_is_returned_as_is() {
        let h = FixedDateHoliday::new(7, 4, &HashMap::new()).unwrap();
        assert_eq!(h.get_holiday(2026), HashSet::from([ymd(2026, 7, 4)]));
    }

    #[test]
    fn invalid_month_day_is_rejected() {
        assert!(FixedDateHoliday::new(2, 30, &HashMap::new()).is_none());
        assert!(FixedDateHoliday::new(13, 1, &HashMap::new()).is_none());
    }

    #[test]
    fn leap_day_only_exists_in_leap_years() {
        let h = FixedDateHoliday::new(2, 29, &HashMap::new()).unwrap();
        assert_eq!(h.get_holiday(2024).len(), 1);
        assert!(h.get_holiday(2025).is_empty());
    }

    #[test]
    fn new_year_observed_on_previous_friday_crosses_year() {
        // 2022-01-01 is a Saturday, observed on Friday 2021-12-31
        let map = HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday),
        ]);
        let h = FixedDateHoliday::new(1, 1, &map).unwrap();
        assert!(h.get_holiday(2022).is_empty());
        assert_eq!(h.get_holiday(2021), HashSet::from([ymd(2021, 1, 1), ymd(2021, 12, 31)]));
    }

    #[test]
    fn year_end_holiday_observed_in_january() {
        // 2022-12-31 is a Saturday, observed on Monday 2023-01-02
        let map = HashMap::from([
            (Weekday::Sat, WeekendAdjustment::NextWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday),
        ]);
        let h = FixedDateHoliday::new(12, 31, &map).unwrap();
        assert!(h.get_holiday(2022).is_empty());
        assert!(h.get_holiday(2023).contains(&ymd(2023, 1, 2)));
    }

    #[test]
    fn extreme_years_yield_nothing() {
        let map = HashMap::from([
            (Weekday::Sat, WeekendAdjustment::NextWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday),
        ]);
        let new_year = FixedDateHoliday::new(1, 1, &map).unwrap();
        let year_end = FixedDateHoliday::new(12, 31, &map).unwrap();
        for year in [i32::MIN, i32::MAX] {
            assert!(new_year.get_holiday(year).is_empty());
            assert!(year_end.get_holiday(year).is_empty());
        }
    }
}
