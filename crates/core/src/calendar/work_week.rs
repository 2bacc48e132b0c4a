//! Work week shapes.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// How many days per week a company works.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkWeek {
    /// Monday through Friday.
    #[default]
    FiveDay,
    /// Monday through Saturday.
    SixDay,
    /// Every day of the week.
    SevenDay,
}

impl WorkWeek {
    /// Maps a stored day count to a work week shape.
    ///
    /// Anything other than 6 or 7 (including the unset 0) falls back to
    /// the five-day default.
    #[must_use]
    pub fn from_days(days: u8) -> Self {
        match days {
            6 => Self::SixDay,
            7 => Self::SevenDay,
            _ => Self::FiveDay,
        }
    }

    /// Number of working days per week.
    #[must_use]
    pub const fn days_per_week(self) -> u8 {
        match self {
            Self::FiveDay => 5,
            Self::SixDay => 6,
            Self::SevenDay => 7,
        }
    }

    /// Returns true if the given weekday is a working day.
    #[must_use]
    pub fn includes(self, weekday: Weekday) -> bool {
        match self {
            Self::FiveDay => !matches!(weekday, Weekday::Sat | Weekday::Sun),
            Self::SixDay => weekday != Weekday::Sun,
            Self::SevenDay => true,
        }
    }
}
