//! Weekday model for timetable rows.
//!
//! Timetables cover Monday through Saturday. Days are stored and serialized as
//! their 1-based index (Monday = 1, Saturday = 6).

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A teaching day shown as one row of the timetable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

/// Returned when an index does not name a teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("day of week must be between 1 (Monday) and 6 (Saturday), got {0}")]
pub struct InvalidWeekday(pub u8);

impl Weekday {
    /// All rows of the grid, top to bottom.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// 1-based index used in storage and snapshots.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index).checked_sub(1)?).copied()
    }

    /// Full English name, e.g. "Wednesday".
    pub fn name(self) -> String {
        // 2025-06-15 is a Sunday, so adding the index lands on the matching weekday.
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default();
        (sunday + Duration::days(i64::from(self.index())))
            .format("%A")
            .to_string()
    }

    /// Three letter label for narrow layouts.
    pub fn short_name(self) -> String {
        self.name().chars().take(3).collect()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = InvalidWeekday;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(InvalidWeekday(value))
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.index()
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
