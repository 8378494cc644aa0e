use std::fmt;
use std::ops::{Add, Sub};

use chrono::{
    Duration,
    NaiveDate
};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TimeUnit {
    Days,
    Weeks
}

impl TimeUnit {
    pub fn to_char(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W'
        }
    }

    fn days_per_unit(&self) -> i64 {
        match self {
            TimeUnit::Days => 1,
            TimeUnit::Weeks => 7
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Period {
    number: i32,
    unit: TimeUnit
}

impl Period {
    pub fn new(number: i32, unit: TimeUnit) -> Period {
        Period { number, unit }
    }

    pub fn days(number: i32) -> Period {
        Period::new(number, TimeUnit::Days)
    }

    pub fn weeks(number: i32) -> Period {
        Period::new(number, TimeUnit::Weeks)
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn to_duration(&self) -> Duration {
        Duration::days(self.unit.days_per_unit() * self.number as i64)
    }

    /// Shifts `d` by this period, or `None` when the result leaves chrono's
    /// supported date range.
    pub fn checked_shift(&self, d: NaiveDate) -> Option<NaiveDate> {
        d.checked_add_signed(self.to_duration())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.to_char())
    }
}

impl Add<Period> for NaiveDate {
    type Output = Self;

    fn add(self, period: Period) -> Self {
        self + period.to_duration()
    }
}

impl Sub<Period> for NaiveDate {
    type Output = Self;

    fn sub(self, period: Period) -> Self {
        self + Period::new(-period.number, period.unit)
    }
}
