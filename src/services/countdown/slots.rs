use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::metrics::{DerivedMetrics, ProgressPercent};
use crate::models::settings::CountdownConfig;
use crate::utils::date::format_display_date;

use super::weekend::WeekendState;

/// Named values consumed by the display layer. Every field is a plain value;
/// presentation is up to whoever renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSlots {
    pub current_date: String,
    pub current_week: i64,
    pub days_elapsed: i64,
    pub days_left: i64,
    pub days_left_label: String,
    pub progress: ProgressPercent,
    pub progress_bar_width: String,
    pub progress_label: String,
    pub working_days_left: i64,
    pub working_days_left_label: String,
    pub weeks_left: i64,
    pub weeks_left_label: String,
    pub weekend_countdown: String,
    pub weekend_label: String,
    pub weekend_visible: bool,
    pub next_holiday_days: i64,
    pub next_holiday_label: String,
    pub next_holiday_name: String,
    pub next_holiday_date: String,
    pub next_holiday_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_target: Option<String>,
}

impl PageSlots {
    pub fn build(config: &CountdownConfig, metrics: &DerivedMetrics, weekend: WeekendState) -> Self {
        let labels = &config.labels;

        let progress_label = if metrics.progress.is_complete() {
            labels.completion.clone()
        } else {
            labels.progress.clone()
        };

        let (weekend_countdown, weekend_label) = match weekend {
            WeekendState::Countdown(remaining) => {
                (remaining.to_string(), labels.weekend_countdown.clone())
            }
            WeekendState::Celebration => (
                labels.weekend_celebration.clone(),
                labels.weekend_celebration_label.clone(),
            ),
            WeekendState::Hidden => (String::new(), String::new()),
        };

        let (next_holiday_name, next_holiday_date, next_holiday_visible) =
            match &metrics.next_holiday {
                Some(holiday) => (
                    holiday.name.clone(),
                    format_display_date(holiday.date),
                    holiday.upcoming,
                ),
                None => (String::new(), String::new(), false),
            };

        Self {
            current_date: format_display_date(metrics.current),
            current_week: metrics.current_week,
            days_elapsed: metrics.days_elapsed,
            days_left: metrics.days_left,
            days_left_label: labels.days_left.select(metrics.days_left).to_string(),
            progress: metrics.progress,
            // Same display form as the value, so completion is "100%" rather than "100.0%".
            progress_bar_width: format!("{}%", metrics.progress),
            progress_label,
            working_days_left: metrics.working_days_left,
            working_days_left_label: labels
                .working_days_left
                .select(metrics.working_days_left)
                .to_string(),
            weeks_left: metrics.weeks_left,
            weeks_left_label: labels.weeks_left.select(metrics.weeks_left).to_string(),
            weekend_countdown,
            weekend_label,
            weekend_visible: weekend.is_visible(),
            next_holiday_days: metrics.days_to_next_holiday,
            next_holiday_label: labels
                .next_holiday
                .select(metrics.days_to_next_holiday)
                .to_string(),
            next_holiday_name,
            next_holiday_date,
            next_holiday_visible,
            navigation_target: navigation_target(
                metrics.current,
                config.range.end(),
                config.navigation_url.as_deref(),
            )
            .map(str::to_string),
        }
    }
}

impl fmt::Display for PageSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  (week {})", self.current_date, self.current_week)?;
        writeln!(f, "{} {}", self.days_left, self.days_left_label)?;
        writeln!(f, "{}% {}", self.progress, self.progress_label)?;
        writeln!(f, "{} {}", self.working_days_left, self.working_days_left_label)?;
        writeln!(f, "{} {}", self.weeks_left, self.weeks_left_label)?;
        if self.weekend_visible {
            writeln!(f, "{} {}", self.weekend_countdown, self.weekend_label)?;
        }
        if self.next_holiday_visible {
            writeln!(
                f,
                "{} {}: {} on {}",
                self.next_holiday_days,
                self.next_holiday_label,
                self.next_holiday_name,
                self.next_holiday_date
            )?;
        }
        Ok(())
    }
}

/// Where the click-through leads, only while the countdown is still running.
pub fn navigation_target(current: NaiveDate, end: NaiveDate, url: Option<&str>) -> Option<&str> {
    if current < end {
        url
    } else {
        None
    }
}
