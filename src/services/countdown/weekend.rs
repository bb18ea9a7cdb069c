//! Live countdown to Friday evening.
//!
//! Counts down to the next Friday start time, shows a celebration between
//! Friday evening and Sunday evening, and goes away once the last Friday
//! before the end of the range has arrived.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::models::settings::WeekendCountdownConfig;
use crate::utils::date::pad_left;

/// Time left until the weekend starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    pub fn from_duration(duration: Duration) -> Self {
        let total = duration.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: total % 3600 / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}h {}m {}s",
            self.hours,
            pad_left(self.minutes, 2),
            pad_left(self.seconds, 2)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "remaining", rename_all = "snake_case")]
pub enum WeekendState {
    Countdown(TimeRemaining),
    Celebration,
    /// The final weekend cutoff has passed; the host hides the element.
    Hidden,
}

impl WeekendState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Friday of the week before the (Sunday-started) week containing `end`, at
/// the configured start time.
pub fn final_friday(end: NaiveDate, config: &WeekendCountdownConfig) -> NaiveDateTime {
    let back = i64::from(end.weekday().num_days_from_sunday()) + 2;
    (end - Duration::days(back)).and_time(config.starts_at)
}

/// Friday start time through Sunday end time.
pub fn is_weekend_window(now: NaiveDateTime, config: &WeekendCountdownConfig) -> bool {
    let time = now.time();
    match now.weekday() {
        Weekday::Fri => time >= config.starts_at,
        Weekday::Sat => true,
        Weekday::Sun => time < config.ends_at,
        _ => false,
    }
}

/// The first Friday start time strictly after `now`.
pub fn next_weekend_start(now: NaiveDateTime, config: &WeekendCountdownConfig) -> NaiveDateTime {
    let today = i64::from(now.weekday().num_days_from_monday());
    let friday = i64::from(Weekday::Fri.num_days_from_monday());
    let days_ahead = (friday - today).rem_euclid(7);

    let target = (now.date() + Duration::days(days_ahead)).and_time(config.starts_at);
    if target <= now {
        target + Duration::days(7)
    } else {
        target
    }
}

pub fn weekend_state(
    now: NaiveDateTime,
    end: NaiveDate,
    config: &WeekendCountdownConfig,
) -> WeekendState {
    if !config.enabled || now >= final_friday(end, config) {
        return WeekendState::Hidden;
    }
    if is_weekend_window(now, config) {
        return WeekendState::Celebration;
    }
    WeekendState::Countdown(TimeRemaining::from_duration(
        next_weekend_start(now, config) - now,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekendTick {
    pub state: WeekendState,
    /// False once the countdown is hidden for good; the host stops its timer.
    pub keep_running: bool,
}

/// Poll-style driver for a host-owned one-second timer.
#[derive(Debug, Clone, Copy)]
pub struct WeekendTicker {
    end: NaiveDate,
    config: WeekendCountdownConfig,
}

impl WeekendTicker {
    pub fn new(end: NaiveDate, config: WeekendCountdownConfig) -> Self {
        Self { end, config }
    }

    pub fn tick(&self, now: NaiveDateTime) -> WeekendTick {
        let state = weekend_state(now, self.end, &self.config);
        log::debug!("Weekend tick at {}: {:?}", now, state);
        WeekendTick {
            state,
            keep_running: state.is_visible(),
        }
    }
}
