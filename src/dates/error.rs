use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateCodecError {
    #[error("Expected a 4-digit MMDD key, got '{0}'")]
    InvalidFormat(String),

    #[error("Month {0:02} is outside 01-12")]
    MonthOutOfRange(u32),

    #[error("Day {day:02} does not exist in month {month:02}")]
    DayOutOfRange { month: u32, day: u32 },

    #[error("Day of year {0} is outside 1-365")]
    DayOfYearOutOfRange(u32),
}
