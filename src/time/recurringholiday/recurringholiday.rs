use std::collections::HashSet;

use chrono::NaiveDate;

/// A rule producing the dates of one holiday in a given year.
pub trait RecurringHoliday: Send + Sync {
    /// Usually one date; empty when the holiday does not fall in `year`.
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate>;
}
