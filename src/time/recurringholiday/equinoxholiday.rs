use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recurringholiday::RecurringHoliday;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Equinox {
    Vernal,
    Autumnal
}

/// Day of the March or September equinox in Japan Standard Time, from the
/// approximation used for Japan's national holidays (valid 1980..=2099).
#[derive(Clone, Debug)]
pub struct EquinoxHoliday {
    equinox: Equinox
}

impl EquinoxHoliday {
    pub fn new(equinox: Equinox) -> EquinoxHoliday {
        EquinoxHoliday { equinox }
    }

    pub fn equinox_day(&self, year: i32) -> Option<NaiveDate> {
        if !(1980..=2099).contains(&year) {
            return None;
        }

        let (month, base) = match self.equinox {
            Equinox::Vernal => (3, 20.8431),
            Equinox::Autumnal => (9, 23.2488)
        };
        let elapsed = year - 1980;
        let day = (base + 0.242194 * elapsed as f64 - (elapsed / 4) as f64).floor();

        NaiveDate::from_ymd_opt(year, month, day as u32)
    }
}

impl RecurringHoliday for EquinoxHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        self.equinox_day(year).into_iter().collect()
    }
}
