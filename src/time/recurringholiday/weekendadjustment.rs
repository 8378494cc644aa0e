use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use super::super::period::Period;


#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Observed-date rule for a fixed-date holiday, indexed by weekday
/// (0 = Monday, 6 = Sunday).
#[derive(Clone, Debug)]
pub struct WeekendAdjustmentRule {
    // None: the holiday is observed on its own date
    rule: [Option<Period>; 7]
}

impl WeekendAdjustmentRule {
    /// Every key of `adjustment_map` counts as a weekend day. A holiday
    /// falling on one is moved in the configured direction until it reaches
    /// a day that is not a key of the map.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule: [Option<Period>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let mut to_weekday = weekday;
            let next_weekday = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut shift_days: i32 = 0;
            let one_day = adj as i32;

            // a map covering the whole week has no weekday to land on
            while adjustment_map.contains_key(&to_weekday) && shift_days.abs() < 7 {
                to_weekday = next_weekday(&to_weekday);
                shift_days += one_day;
            }

            if shift_days.abs() < 7 {
                let idx = weekday.num_days_from_monday() as usize;
                rule[idx] = Some(Period::days(shift_days));
            }
        }

        WeekendAdjustmentRule { rule }
    }

    /// Longest shift in days; bounds how far an observed date can move.
    pub fn max_shift(&self) -> u32 {
        self.rule
            .iter()
            .flatten()
            .map(|p| p.number().unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Observed date of `d`; `None` when the shift leaves chrono's date range.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        let idx = d.weekday().num_days_from_monday() as usize;

        match self.rule[idx] {
            Some(period) => period.checked_shift(d),
            None => Some(d),
        }
    }
}
