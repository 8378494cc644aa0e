use crate::holiday::holidayrecord::HolidayRecord;

/// Public holidays of one country.
pub trait HolidayCalendar: Send + Sync {
    fn display_name(&self) -> &str;

    /// Holidays dated in `year`, ordered by date then name.
    fn holidays(&self, year: i32) -> Vec<HolidayRecord>;
}
