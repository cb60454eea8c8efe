//! Slot model: one class occupying contiguous periods on a single day.
//!
//! Periods are 1-based and inclusive, so a slot with `start_of_period == 2`
//! and `end_of_period == 4` covers three hour-columns.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::weekday::Weekday;

/// A scheduled class in the weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Client-generated identifier, stable for the slot's lifetime.
    /// Empty in imported data until the editor assigns one.
    #[serde(default)]
    pub id: String,
    pub day_of_week: Weekday,
    pub start_of_period: u8,
    pub end_of_period: u8,
    /// Catalog reference for the subject taught in this slot
    pub subject_id: String,
    /// Display label, copied from the catalog when the slot is created
    pub subject_name: String,
}

/// Where a new slot would go, before content is chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotInfo {
    pub day_of_week: Weekday,
    pub start_of_period: u8,
    pub end_of_period: u8,
}

impl SlotInfo {
    /// A one-period placement at `period` on `day`.
    pub fn single(day: Weekday, period: u8) -> Self {
        Self {
            day_of_week: day,
            start_of_period: period,
            end_of_period: period,
        }
    }

    /// Turns the placement into a slot with a fresh id.
    pub fn into_slot(self, subject_id: impl Into<String>, subject_name: impl Into<String>) -> Slot {
        Slot {
            id: new_slot_id(),
            day_of_week: self.day_of_week,
            start_of_period: self.start_of_period,
            end_of_period: self.end_of_period,
            subject_id: subject_id.into(),
            subject_name: subject_name.into(),
        }
    }
}

/// Generates a new opaque slot id.
pub fn new_slot_id() -> String {
    Uuid::new_v4().to_string()
}

impl Slot {
    /// Create a slot with a freshly generated id.
    pub fn new(
        day_of_week: Weekday,
        start_of_period: u8,
        end_of_period: u8,
        subject_id: impl Into<String>,
        subject_name: impl Into<String>,
    ) -> Self {
        Self {
            id: new_slot_id(),
            day_of_week,
            start_of_period,
            end_of_period,
            subject_id: subject_id.into(),
            subject_name: subject_name.into(),
        }
    }

    /// Number of hour-columns the slot occupies.
    pub fn span(&self) -> u8 {
        self.end_of_period.saturating_sub(self.start_of_period) + 1
    }

    /// True if `period` falls inside the slot.
    pub fn covers(&self, period: u8) -> bool {
        (self.start_of_period..=self.end_of_period).contains(&period)
    }

    /// True if both slots sit on the same day and share at least one period.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.day_of_week == other.day_of_week
            && self.start_of_period <= other.end_of_period
            && other.start_of_period <= self.end_of_period
    }

    /// The placement of this slot without its content.
    pub fn info(&self) -> SlotInfo {
        SlotInfo {
            day_of_week: self.day_of_week,
            start_of_period: self.start_of_period,
            end_of_period: self.end_of_period,
        }
    }

    /// Assigns a generated id if the slot has none.
    pub fn ensure_id(&mut self) {
        if self.id.trim().is_empty() {
            self.id = new_slot_id();
        }
    }

    /// Check the slot against a grid of `number_of_hours` columns.
    pub fn validate(&self, number_of_hours: u8) -> Result<(), SlotValidationError> {
        if self.start_of_period < 1 {
            return Err(SlotValidationError::StartBeforeFirstPeriod);
        }
        if self.start_of_period > self.end_of_period {
            return Err(SlotValidationError::EndBeforeStart {
                start: self.start_of_period,
                end: self.end_of_period,
            });
        }
        if self.end_of_period > number_of_hours {
            return Err(SlotValidationError::EndPastLastPeriod {
                end: self.end_of_period,
                number_of_hours,
            });
        }
        if self.subject_name.trim().is_empty() {
            return Err(SlotValidationError::EmptySubject);
        }
        Ok(())
    }
}

/// Validation errors for Slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotValidationError {
    #[error("Slot must start at period 1 or later")]
    StartBeforeFirstPeriod,
    #[error("Slot ends at period {end} before it starts at period {start}")]
    EndBeforeStart { start: u8, end: u8 },
    #[error("Slot ends at period {end} but the day only has {number_of_hours} periods")]
    EndPastLastPeriod { end: u8, number_of_hours: u8 },
    #[error("Slot has no subject")]
    EmptySubject,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: Weekday, start: u8, end: u8) -> Slot {
        Slot::new(day, start, end, "sub-1", "Physics")
    }

    #[test]
    fn test_span_and_covers() {
        let s = slot(Weekday::Monday, 2, 4);
        assert_eq!(s.span(), 3);
        assert!(s.covers(2));
        assert!(s.covers(4));
        assert!(!s.covers(1));
        assert!(!s.covers(5));
    }

    #[test]
    fn test_overlap_requires_same_day() {
        let a = slot(Weekday::Monday, 2, 4);
        assert!(a.overlaps(&slot(Weekday::Monday, 4, 5)));
        assert!(!a.overlaps(&slot(Weekday::Monday, 5, 6)));
        assert!(!a.overlaps(&slot(Weekday::Tuesday, 2, 4)));
    }

    #[test]
    fn test_validate_bounds() {
        assert!(slot(Weekday::Monday, 1, 7).validate(7).is_ok());
        assert_eq!(
            slot(Weekday::Monday, 0, 1).validate(7),
            Err(SlotValidationError::StartBeforeFirstPeriod)
        );
        assert_eq!(
            slot(Weekday::Monday, 3, 2).validate(7),
            Err(SlotValidationError::EndBeforeStart { start: 3, end: 2 })
        );
        assert_eq!(
            slot(Weekday::Monday, 6, 8).validate(7),
            Err(SlotValidationError::EndPastLastPeriod { end: 8, number_of_hours: 7 })
        );
    }

    #[test]
    fn test_validate_requires_subject_name() {
        let s = Slot::new(Weekday::Friday, 1, 1, "sub-1", "  ");
        assert_eq!(s.validate(7), Err(SlotValidationError::EmptySubject));
    }

    #[test]
    fn test_new_slots_get_unique_ids() {
        let a = slot(Weekday::Monday, 1, 1);
        let b = slot(Weekday::Monday, 1, 1);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_ensure_id_keeps_existing_id() {
        let mut s = slot(Weekday::Monday, 1, 1);
        s.id = "keep-me".to_string();
        s.ensure_id();
        assert_eq!(s.id, "keep-me");

        s.id = String::new();
        s.ensure_id();
        assert!(!s.id.is_empty());
    }

    #[test]
    fn test_json_shape_uses_camel_case() {
        let json = r#"{"dayOfWeek":3,"startOfPeriod":4,"endOfPeriod":4,"subjectId":"s","subjectName":"Maths"}"#;
        let s: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, "");
        assert_eq!(s.day_of_week, Weekday::Wednesday);
        assert_eq!(s.info(), SlotInfo::single(Weekday::Wednesday, 4));
    }
}
