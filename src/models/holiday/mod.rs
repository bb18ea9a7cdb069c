// Holiday calendar model
// Public holidays keyed by date, iterated in chronological order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Holiday entry as written in a config file. The date stays a string until
/// the calendar is built so one bad key does not reject the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    pub date: String,
    pub name: String,
}

impl From<&Holiday> for HolidayEntry {
    fn from(holiday: &Holiday) -> Self {
        Self {
            date: holiday.date.format("%Y-%m-%d").to_string(),
            name: holiday.name.clone(),
        }
    }
}

/// Immutable, chronologically ordered holiday calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Builds a calendar, sorting by date. When a date appears twice the
    /// first label wins.
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut holidays: Vec<Holiday> = holidays.into_iter().collect();
        holidays.sort_by_key(|holiday| holiday.date);
        holidays.dedup_by_key(|holiday| holiday.date);
        Self { holidays }
    }

    /// Builds a calendar from config entries, skipping dates that do not parse.
    pub fn from_entries(entries: &[HolidayEntry]) -> Self {
        let parsed = entries.iter().filter_map(|entry| {
            match NaiveDate::parse_from_str(entry.date.trim(), "%Y-%m-%d") {
                Ok(date) => Some(Holiday::new(date, entry.name.clone())),
                Err(err) => {
                    log::warn!(
                        "Skipping holiday {:?} with unparseable date {:?}: {}",
                        entry.name,
                        entry.date,
                        err
                    );
                    None
                }
            }
        });
        Self::new(parsed)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays
            .binary_search_by_key(&date, |holiday| holiday.date)
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter()
    }

    pub fn last(&self) -> Option<&Holiday> {
        self.holidays.last()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn to_entries(&self) -> Vec<HolidayEntry> {
        self.holidays.iter().map(HolidayEntry::from).collect()
    }
}
