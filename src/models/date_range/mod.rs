// Date range model
// The fixed start/end pair every countdown is measured against.

use chrono::NaiveDate;

use crate::error::{CountdownError, CountdownResult};
use crate::utils::date::days_between;

/// Inclusive calendar range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> CountdownResult<Self> {
        if start > end {
            return Err(CountdownError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering both dates, whichever order they come in.
    pub fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Total number of days from start to end.
    pub fn total_days(&self) -> i64 {
        days_between(self.end, self.start)
    }

    /// Substitutes the nearest boundary for dates outside the range.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start, self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
