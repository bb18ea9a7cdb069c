// Test fixtures - reusable test data
// Provides consistent dates and calendars across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_countdown::models::date_range::DateRange;
use rust_countdown::models::holiday::{Holiday, HolidayCalendar};
use rust_countdown::models::settings::CountdownConfig;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn at(date: NaiveDate, h: u32, m: u32, s: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, s).unwrap()
    }

    /// Returns Jul 27, 2020 (Monday), the default start date
    pub fn range_start() -> NaiveDate {
        ymd(2020, 7, 27)
    }

    /// Returns Apr 29, 2021 (Thursday), the default end date
    pub fn range_end() -> NaiveDate {
        ymd(2021, 4, 29)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample configurations for testing
pub mod configs {
    use super::*;

    /// The built-in 2020/21 calendar
    pub fn singapore_2020() -> CountdownConfig {
        CountdownConfig::default()
    }

    /// A short range ending on Tuesday Apr 30, 2024 with a single holiday
    pub fn spring_2024() -> CountdownConfig {
        CountdownConfig {
            range: DateRange::new(dates::ymd(2024, 1, 2), dates::ymd(2024, 4, 30)).unwrap(),
            holidays: HolidayCalendar::new([
                Holiday::new(dates::ymd(2024, 2, 12), "Chinese New Year (observed)"),
                Holiday::new(dates::ymd(2024, 3, 29), "Good Friday"),
            ]),
            ..CountdownConfig::default()
        }
    }
}
