use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::holiday::holidayrecord::HolidayRecord;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// A recurring rule with the holiday's name and the years it is observed.
#[derive(Clone)]
pub struct NamedRecurringHoliday {
    name: String,
    rule: Arc<dyn RecurringHoliday>,
    first_year: Option<i32>,
    last_year: Option<i32>
}

impl NamedRecurringHoliday {
    pub fn new(name: impl Into<String>, rule: Arc<dyn RecurringHoliday>) -> NamedRecurringHoliday {
        NamedRecurringHoliday {
            name: name.into(),
            rule,
            first_year: None,
            last_year: None
        }
    }

    pub fn with_years(mut self, first_year: Option<i32>, last_year: Option<i32>) -> NamedRecurringHoliday {
        self.first_year = first_year;
        self.last_year = last_year;
        self
    }

    pub fn applies_to(&self, year: i32) -> bool {
        self.first_year.is_none_or(|first| year >= first)
            && self.last_year.is_none_or(|last| year <= last)
    }

    fn holidays(&self, year: i32) -> impl Iterator<Item = HolidayRecord> + '_ {
        let dates = if self.applies_to(year) {
            self.rule.get_holiday(year)
        } else {
            HashSet::new()
        };
        dates.into_iter().map(move |d| HolidayRecord::new(d, self.name.as_str()))
    }
}

pub struct SimpleCalendar {
    display_name: String,
    recurring_holidays: Vec<NamedRecurringHoliday>,
    additional_holidays: Vec<HolidayRecord>,
    removed_holidays: HashSet<NaiveDate>
}

impl SimpleCalendar {
    /// # Arguments
    /// * `display_name` - Country name shown to users
    /// * `recurring_holidays` - Rules producing a holiday every year
    /// * `additional_holidays` - One-off dated holidays
    /// * `removed_holidays` - Dates dropped from the result whatever produced them
    pub fn new(
        display_name: impl Into<String>,
        recurring_holidays: Vec<NamedRecurringHoliday>,
        additional_holidays: Vec<HolidayRecord>,
        removed_holidays: Vec<NaiveDate>
    ) -> SimpleCalendar {
        SimpleCalendar {
            display_name: display_name.into(),
            recurring_holidays,
            additional_holidays,
            removed_holidays: removed_holidays.into_iter().collect()
        }
    }

    #[inline]
    pub fn is_removed(&self, d: NaiveDate) -> bool {
        self.removed_holidays.contains(&d)
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn holidays(&self, year: i32) -> Vec<HolidayRecord> {
        // BTreeSet drops exact duplicates and yields date order
        let mut holiday_set: BTreeSet<HolidayRecord> = BTreeSet::new();

        for r in self.recurring_holidays.iter() {
            holiday_set.extend(r.holidays(year));
        }

        holiday_set.extend(
            self.additional_holidays
                .iter()
                .filter(|h| h.date().year() == year)
                .cloned()
        );

        holiday_set
            .into_iter()
            .filter(|h| !self.is_removed(h.date()))
            .collect()
    }
}
