// Date utility functions
// Whole-day arithmetic and display helpers shared by the calculator and the slots.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CountdownError, CountdownResult};

/// Display format for dates on the page, e.g. `2020-07-27 (Mon)`.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d (%a)";

/// Signed number of whole days from `from` to `to` (`to - from`).
pub fn days_between(to: NaiveDate, from: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Signed number of weeks from `from` to `to`, keeping the fractional part.
pub fn fractional_weeks_between(to: NaiveDate, from: NaiveDate) -> f64 {
    days_between(to, from) as f64 / 7.0
}

/// Left-pads a number with zeros to at least `width` characters.
///
/// Negative numbers keep their sign in front of the padding.
pub fn pad_left(number: i64, width: usize) -> String {
    if number < 0 {
        format!("-{:0>width$}", number.unsigned_abs(), width = width.saturating_sub(1))
    } else {
        format!("{:0>width$}", number, width = width)
    }
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
/// A bare date means midnight.
pub fn parse_date_time(input: &str) -> CountdownResult<NaiveDateTime> {
    let trimmed = input.trim();

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| CountdownError::InvalidDateTime {
            input: input.to_string(),
        })
}
