use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekError {
    #[error("week {week} does not exist in ISO year {iso_year}")]
    InvalidWeek {
        iso_year: i32,
        week: u32
    },
    #[error("ISO year {0} is outside the supported date range")]
    YearOutOfRange(i32),
    #[error("malformed date '{date}' for holiday '{name}', expected YYYY-MM-DD")]
    MalformedDate {
        date: String,
        name: String
    }
}
