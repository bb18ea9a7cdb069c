// Derived countdown metrics
// Recomputed on every evaluation; nothing here is persisted.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Which label form an "N left" quantity selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Plurality {
    Singular,
    Plural,
}

impl Plurality {
    pub fn of(count: i64) -> Self {
        if count == 1 {
            Self::Singular
        } else {
            Self::Plural
        }
    }
}

/// Progress through the range, kept in tenths of a percent (0..=1000).
///
/// Displays with one decimal place, except that anything under 1% shows as
/// `0` and completion shows as `100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ProgressPercent {
    tenths: u16,
}

impl ProgressPercent {
    pub const ZERO: Self = Self { tenths: 0 };
    pub const COMPLETE: Self = Self { tenths: 1000 };

    /// Rounds `percent` to one decimal place and clamps it into [0, 100].
    /// A whole-number part of zero counts as no progress.
    pub fn from_percent(percent: f64) -> Self {
        if !percent.is_finite() || percent <= 0.0 {
            return Self::ZERO;
        }
        let tenths = (percent * 10.0).round().min(1000.0) as u16;
        if tenths < 10 {
            return Self::ZERO;
        }
        Self { tenths }
    }

    pub fn is_complete(&self) -> bool {
        *self == Self::COMPLETE
    }
}

impl fmt::Display for ProgressPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tenths {
            0 => write!(f, "0"),
            1000 => write!(f, "100"),
            tenths => write!(f, "{}.{}", tenths / 10, tenths % 10),
        }
    }
}

impl Serialize for ProgressPercent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The holiday the "next public holiday" card points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextHoliday {
    pub date: NaiveDate,
    pub name: String,
    /// False when every holiday is on or before the current date and the
    /// lookup fell back to the last entry.
    pub upcoming: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    pub current: NaiveDate,
    pub current_week: i64,
    pub days_elapsed: i64,
    pub days_left: i64,
    pub working_days_left: i64,
    pub weeks_left: i64,
    pub progress: ProgressPercent,
    pub next_holiday: Option<NextHoliday>,
    pub days_to_next_holiday: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "0" ; "zero")]
    #[test_case(-12.5, "0" ; "negative clamps")]
    #[test_case(50.0, "50.0" ; "keeps one decimal")]
    #[test_case(57.2826, "57.3" ; "rounds to one decimal")]
    #[test_case(0.04, "0" ; "rounds down to zero")]
    #[test_case(0.4, "0" ; "under one percent is zero")]
    #[test_case(0.7, "0" ; "still under one percent")]
    #[test_case(0.96, "1.0" ; "rounds up to one percent")]
    #[test_case(1.1, "1.1" ; "one percent keeps decimal")]
    #[test_case(99.96, "100" ; "rounds up to complete")]
    #[test_case(100.0, "100" ; "complete has no decimal")]
    #[test_case(f64::NAN, "0" ; "nan is zero")]
    fn test_progress_display(percent: f64, expected: &str) {
        assert_eq!(ProgressPercent::from_percent(percent).to_string(), expected);
    }

    #[test]
    fn test_progress_completion() {
        assert!(ProgressPercent::from_percent(100.0).is_complete());
        assert!(!ProgressPercent::from_percent(99.9).is_complete());
    }

    #[test]
    fn test_plurality() {
        assert_eq!(Plurality::of(1), Plurality::Singular);
        assert_eq!(Plurality::of(0), Plurality::Plural);
        assert_eq!(Plurality::of(7), Plurality::Plural);
    }

    #[test]
    fn test_progress_serializes_as_display_string() {
        let json = serde_json::to_string(&ProgressPercent::from_percent(42.25)).unwrap();
        assert_eq!(json, "\"42.3\"");
    }
}
