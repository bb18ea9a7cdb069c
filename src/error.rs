// Domain errors
// Raised while building a countdown configuration; evaluation itself never fails.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountdownError {
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("weekday {0} is out of range (expected 1 = Monday through 7 = Sunday)")]
    InvalidWeekday(u8),

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("invalid date/time {input:?}: expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")]
    InvalidDateTime { input: String },
}

pub type CountdownResult<T> = std::result::Result<T, CountdownError>;
