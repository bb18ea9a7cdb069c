// Settings module
// Countdown configuration as stored in TOML, and the validated form the calculator uses.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{CountdownError, CountdownResult};
use crate::models::date_range::DateRange;
use crate::models::holiday::{Holiday, HolidayCalendar, HolidayEntry};
use crate::models::metrics::Plurality;

/// Singular/plural pair for an "N left" label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPair {
    pub singular: String,
    pub plural: String,
}

impl LabelPair {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    pub fn select(&self, count: i64) -> &str {
        match Plurality::of(count) {
            Plurality::Singular => &self.singular,
            Plurality::Plural => &self.plural,
        }
    }
}

/// Texts shown next to each output value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSet {
    pub progress: String,
    pub completion: String,
    pub weekend_countdown: String,
    pub weekend_celebration_label: String,
    pub weekend_celebration: String,
    pub days_left: LabelPair,
    pub working_days_left: LabelPair,
    pub weeks_left: LabelPair,
    pub next_holiday: LabelPair,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            progress: "completed".to_string(),
            completion: "🎉CONGRATULATIONS!🎉".to_string(),
            weekend_countdown: "to the weekend".to_string(),
            weekend_celebration_label: "enjoy your weekend!".to_string(),
            weekend_celebration: "🎉".to_string(),
            days_left: LabelPair::new("calendar day left!", "calendar days left!"),
            working_days_left: LabelPair::new("working day left!", "working days left!"),
            weeks_left: LabelPair::new("week to go!", "weeks to go!"),
            next_holiday: LabelPair::new(
                "day to next public holiday",
                "days to next public holiday",
            ),
        }
    }
}

/// Friday-evening to Sunday-evening window for the weekend countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekendCountdownConfig {
    pub enabled: bool,
    /// Friday time the weekend starts.
    pub starts_at: NaiveTime,
    /// Sunday time the weekend ends.
    pub ends_at: NaiveTime,
}

impl Default for WeekendCountdownConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            starts_at: NaiveTime::from_hms_opt(19, 0, 0).unwrap_or(NaiveTime::MIN),
            ends_at: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// Set of weekdays that count as business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingWeekdays {
    mask: u8,
}

impl Default for WorkingWeekdays {
    fn default() -> Self {
        Self { mask: 0b0001_1111 }
    }
}

impl WorkingWeekdays {
    /// Builds the set from ISO weekday numbers (1 = Monday .. 7 = Sunday).
    pub fn from_iso(days: &[u8]) -> CountdownResult<Self> {
        let mut mask = 0u8;
        for &day in days {
            if !(1..=7).contains(&day) {
                return Err(CountdownError::InvalidWeekday(day));
            }
            mask |= 1 << (day - 1);
        }
        Ok(Self { mask })
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.mask & (1 << weekday.num_days_from_monday()) != 0
    }

    pub fn to_iso(&self) -> Vec<u8> {
        (1..=7u8).filter(|day| self.mask & (1 << (day - 1)) != 0).collect()
    }
}

/// Countdown settings as written in `countdown.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSettings {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub working_weekdays: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_url: Option<String>,
    pub labels: LabelSet,
    pub weekend: WeekendCountdownConfig,
    pub holidays: Vec<HolidayEntry>,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        CountdownConfig::default().to_settings()
    }
}

impl CountdownSettings {
    pub fn validate(self) -> CountdownResult<CountdownConfig> {
        let range = DateRange::new(self.start, self.end)?;
        let working_weekdays = WorkingWeekdays::from_iso(&self.working_weekdays)?;
        let timezone = self
            .timezone
            .as_deref()
            .map(|name| {
                Tz::from_str(name).map_err(|_| CountdownError::UnknownTimezone(name.to_string()))
            })
            .transpose()?;

        Ok(CountdownConfig {
            range,
            holidays: HolidayCalendar::from_entries(&self.holidays),
            working_weekdays,
            timezone,
            navigation_url: self.navigation_url,
            labels: self.labels,
            weekend: self.weekend,
        })
    }
}

/// Validated, immutable countdown configuration passed to the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownConfig {
    pub range: DateRange,
    pub holidays: HolidayCalendar,
    pub working_weekdays: WorkingWeekdays,
    pub timezone: Option<Tz>,
    pub navigation_url: Option<String>,
    pub labels: LabelSet,
    pub weekend: WeekendCountdownConfig,
}

impl Default for CountdownConfig {
    /// The 2020-07-27 to 2021-04-29 countdown with Singapore public holidays.
    /// Holidays falling on a Saturday are left out since no day off is given.
    fn default() -> Self {
        let ymd = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let start = ymd(2020, 7, 27);
        let end = ymd(2021, 4, 29);

        Self {
            range: DateRange::spanning(start, end),
            holidays: HolidayCalendar::new([
                Holiday::new(ymd(2020, 7, 31), "🕌 Hari Raya Haji"),
                Holiday::new(ymd(2020, 8, 9), "🇸🇬 National Day"),
                Holiday::new(ymd(2020, 8, 10), "🇸🇬 National Day (observed)"),
                Holiday::new(ymd(2020, 12, 25), "🎄 Christmas Day"),
                Holiday::new(ymd(2021, 1, 1), "🎆 New Year's Day"),
                Holiday::new(ymd(2021, 2, 12), "🧧 Chinese New Year Day 1"),
                Holiday::new(ymd(2021, 4, 2), "⛪ Good Friday"),
            ]),
            working_weekdays: WorkingWeekdays::default(),
            timezone: None,
            navigation_url: Some("kama.html".to_string()),
            labels: LabelSet::default(),
            weekend: WeekendCountdownConfig::default(),
        }
    }
}

impl CountdownConfig {
    pub fn to_settings(&self) -> CountdownSettings {
        CountdownSettings {
            start: self.range.start(),
            end: self.range.end(),
            working_weekdays: self.working_weekdays.to_iso(),
            timezone: self.timezone.map(|tz| tz.name().to_string()),
            navigation_url: self.navigation_url.clone(),
            labels: self.labels.clone(),
            weekend: self.weekend,
            holidays: self.holidays.to_entries(),
        }
    }
}
