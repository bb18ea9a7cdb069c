use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::models::date_range::DateRange;
use crate::models::holiday::HolidayCalendar;
use crate::models::metrics::{DerivedMetrics, NextHoliday, ProgressPercent};
use crate::models::settings::{CountdownConfig, WorkingWeekdays};
use crate::utils::date::{days_between, fractional_weeks_between};

/// Evaluates every countdown metric for a configuration.
///
/// Stateless: each call to [`CountdownCalculator::evaluate`] starts from
/// scratch, so the same instant always yields the same metrics.
pub struct CountdownCalculator<'a> {
    config: &'a CountdownConfig,
}

impl<'a> CountdownCalculator<'a> {
    pub fn new(config: &'a CountdownConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, now: NaiveDateTime) -> DerivedMetrics {
        let range = &self.config.range;
        let current = clamp(now, range);
        let days_left = days_left(current, range.end());
        let next_holiday = next_holiday(current, &self.config.holidays);
        let days_to_next_holiday = next_holiday
            .as_ref()
            .map(|holiday| days_to_next_holiday(holiday.date, current))
            .unwrap_or(0);

        let metrics = DerivedMetrics {
            current,
            current_week: current_week(range.start(), current),
            days_elapsed: days_elapsed(range.start(), current),
            days_left,
            working_days_left: working_days_left(
                current,
                range.end(),
                &self.config.holidays,
                &self.config.working_weekdays,
            ),
            weeks_left: weeks_left(current, range.end()),
            progress: progress_percent(range, current),
            next_holiday,
            days_to_next_holiday,
        };

        log::debug!(
            "Evaluated countdown at {}: current={}, days_left={}, progress={}",
            now,
            metrics.current,
            metrics.days_left,
            metrics.progress
        );

        metrics
    }
}

/// Calendar date of `now`, clamped into the range.
pub fn clamp(now: NaiveDateTime, range: &DateRange) -> NaiveDate {
    range.clamp(now.date())
}

pub fn days_left(current: NaiveDate, end: NaiveDate) -> i64 {
    days_between(end, current).max(0)
}

pub fn days_elapsed(start: NaiveDate, current: NaiveDate) -> i64 {
    days_between(current, start).max(0)
}

/// One-based week number; the first seven days of the range are week 1.
pub fn current_week(start: NaiveDate, current: NaiveDate) -> i64 {
    days_elapsed(start, current) / 7 + 1
}

/// Business days in `(current, end]`.
pub fn working_days_left(
    current: NaiveDate,
    end: NaiveDate,
    holidays: &HolidayCalendar,
    working_weekdays: &WorkingWeekdays,
) -> i64 {
    current
        .iter_days()
        .skip(1)
        .take_while(|day| *day <= end)
        .filter(|day| working_weekdays.contains(day.weekday()) && !holidays.is_holiday(*day))
        .count() as i64
}

/// Remaining weeks, rounding any partial week up.
pub fn weeks_left(current: NaiveDate, end: NaiveDate) -> i64 {
    (fractional_weeks_between(end, current).ceil() as i64).max(0)
}

/// Share of the range already elapsed. A zero-length range is complete.
pub fn progress_percent(range: &DateRange, current: NaiveDate) -> ProgressPercent {
    let total = range.total_days();
    if total <= 0 {
        return ProgressPercent::COMPLETE;
    }
    let left = days_left(current, range.end());
    ProgressPercent::from_percent(100.0 * (total - left) as f64 / total as f64)
}

/// First holiday strictly after `current`. When none is left the last entry
/// is returned with `upcoming` unset so callers can hide it.
pub fn next_holiday(current: NaiveDate, holidays: &HolidayCalendar) -> Option<NextHoliday> {
    let found = holidays
        .iter()
        .find(|holiday| holiday.date > current)
        .or_else(|| holidays.last())?;

    Some(NextHoliday {
        date: found.date,
        name: found.name.clone(),
        upcoming: found.date > current,
    })
}

pub fn days_to_next_holiday(holiday: NaiveDate, current: NaiveDate) -> i64 {
    days_between(holiday, current).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::holiday::Holiday;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn config() -> CountdownConfig {
        CountdownConfig::default()
    }

    #[test]
    fn test_before_start_clamps_to_start() {
        let config = config();
        let metrics = CountdownCalculator::new(&config).evaluate(at(2020, 1, 1, 9, 0));

        assert_eq!(metrics.current, date(2020, 7, 27));
        assert_eq!(metrics.days_left, config.range.total_days());
        assert_eq!(metrics.progress, ProgressPercent::ZERO);
        assert_eq!(metrics.progress.to_string(), "0");
        assert_eq!(metrics.current_week, 1);
        assert_eq!(metrics.days_elapsed, 0);
    }

    #[test]
    fn test_after_end_clamps_to_end() {
        let config = config();
        let metrics = CountdownCalculator::new(&config).evaluate(at(2022, 6, 1, 9, 0));

        assert_eq!(metrics.current, date(2021, 4, 29));
        assert_eq!(metrics.days_left, 0);
        assert_eq!(metrics.working_days_left, 0);
        assert_eq!(metrics.weeks_left, 0);
        assert_eq!(metrics.progress.to_string(), "100");
    }

    #[test]
    fn test_on_end_date_is_complete() {
        let config = config();
        let metrics = CountdownCalculator::new(&config).evaluate(at(2021, 4, 29, 18, 30));

        assert_eq!(metrics.days_left, 0);
        assert!(metrics.progress.is_complete());
        assert_eq!(metrics.progress.to_string(), "100");
    }

    #[test]
    fn test_mid_range_progress_has_one_decimal() {
        let config = config();
        // 138 of 276 days elapsed
        let metrics = CountdownCalculator::new(&config).evaluate(at(2020, 12, 12, 0, 0));
        assert_eq!(metrics.days_left, 138);
        assert_eq!(metrics.progress.to_string(), "50.0");
    }

    #[test_case(date(2020, 7, 28), "0" ; "day one")]
    #[test_case(date(2020, 7, 29), "0" ; "day two")]
    #[test_case(date(2020, 7, 30), "1.1" ; "day three")]
    fn test_first_days_show_no_progress_until_one_percent(current: NaiveDate, expected: &str) {
        let config = config();
        let now = current.and_hms_opt(9, 0, 0).unwrap();
        let metrics = CountdownCalculator::new(&config).evaluate(now);
        assert_eq!(metrics.progress.to_string(), expected);
    }

    #[test]
    fn test_zero_length_range_is_complete() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(progress_percent(&range, date(2024, 1, 1)), ProgressPercent::COMPLETE);
    }

    #[test_case(date(2020, 7, 27), 1 ; "first day")]
    #[test_case(date(2020, 8, 2), 1 ; "sixth day still week one")]
    #[test_case(date(2020, 8, 3), 2 ; "eighth day is week two")]
    #[test_case(date(2021, 4, 29), 40 ; "last day")]
    fn test_current_week(current: NaiveDate, expected: i64) {
        assert_eq!(current_week(date(2020, 7, 27), current), expected);
    }

    #[test_case(date(2024, 4, 30), date(2024, 4, 30), 0 ; "same day")]
    #[test_case(date(2024, 4, 27), date(2024, 4, 30), 1 ; "three days is one week")]
    #[test_case(date(2024, 4, 23), date(2024, 4, 30), 1 ; "exactly one week")]
    #[test_case(date(2024, 4, 22), date(2024, 4, 30), 2 ; "eight days is two weeks")]
    #[test_case(date(2024, 5, 2), date(2024, 4, 30), 0 ; "past end clamps")]
    fn test_weeks_left(current: NaiveDate, end: NaiveDate, expected: i64) {
        assert_eq!(weeks_left(current, end), expected);
    }

    #[test]
    fn test_working_days_skip_weekends_and_holidays() {
        let holidays = HolidayCalendar::new([Holiday::new(date(2020, 7, 31), "Hari Raya Haji")]);
        // Mon 2020-07-27 -> Mon 2020-08-03: Tue, Wed, Thu, (Fri holiday), Mon
        let count = working_days_left(
            date(2020, 7, 27),
            date(2020, 8, 3),
            &holidays,
            &WorkingWeekdays::default(),
        );
        assert_eq!(count, 4);
    }

    #[test]
    fn test_working_days_respects_custom_weekdays() {
        let six_day_week = WorkingWeekdays::from_iso(&[1, 2, 3, 4, 5, 6]).unwrap();
        let count = working_days_left(
            date(2020, 7, 27),
            date(2020, 8, 2),
            &HolidayCalendar::default(),
            &six_day_week,
        );
        // Tue..Sat
        assert_eq!(count, 5);
    }

    #[test]
    fn test_working_days_zero_when_current_is_end() {
        let count = working_days_left(
            date(2021, 4, 29),
            date(2021, 4, 29),
            &HolidayCalendar::default(),
            &WorkingWeekdays::default(),
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_next_holiday_one_day_away() {
        let holidays = HolidayCalendar::new([Holiday::new(date(2020, 7, 31), "H1")]);
        let next = next_holiday(date(2020, 7, 30), &holidays).unwrap();

        assert_eq!(next.date, date(2020, 7, 31));
        assert!(next.upcoming);
        assert_eq!(days_to_next_holiday(next.date, date(2020, 7, 30)), 1);
    }

    #[test]
    fn test_next_holiday_skips_holiday_on_current_date() {
        let config = config();
        let next = next_holiday(date(2020, 8, 9), &config.holidays).unwrap();
        assert_eq!(next.date, date(2020, 8, 10));
    }

    #[test]
    fn test_next_holiday_falls_back_to_last_entry() {
        let config = config();
        let next = next_holiday(date(2021, 4, 20), &config.holidays).unwrap();

        assert_eq!(next.date, date(2021, 4, 2));
        assert!(!next.upcoming);
        assert_eq!(days_to_next_holiday(next.date, date(2021, 4, 20)), 0);
    }

    #[test]
    fn test_next_holiday_empty_calendar() {
        assert_eq!(next_holiday(date(2021, 4, 20), &HolidayCalendar::default()), None);
    }
}
