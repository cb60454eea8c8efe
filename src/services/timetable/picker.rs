//! Picker state for creating a slot in an empty cell.
//!
//! `Closed -> Open { slot_info, position } -> Closed`. A timetable holds one
//! picker, so opening it again simply moves it to the new cell.

use crate::models::slot::SlotInfo;

/// Screen position the picker is anchored at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PickerState {
    #[default]
    Closed,
    Open {
        slot_info: SlotInfo,
        position: PointerPosition,
    },
}

impl PickerState {
    pub fn open(&mut self, slot_info: SlotInfo, position: PointerPosition) {
        *self = PickerState::Open {
            slot_info,
            position,
        };
    }

    /// Close the picker, returning the placement it was showing.
    pub fn close(&mut self) -> Option<SlotInfo> {
        match std::mem::take(self) {
            PickerState::Open { slot_info, .. } => Some(slot_info),
            PickerState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PickerState::Open { .. })
    }

    pub fn slot_info(&self) -> Option<SlotInfo> {
        match self {
            PickerState::Open { slot_info, .. } => Some(*slot_info),
            PickerState::Closed => None,
        }
    }

    pub fn position(&self) -> Option<PointerPosition> {
        match self {
            PickerState::Open { position, .. } => Some(*position),
            PickerState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weekday::Weekday;

    #[test]
    fn test_open_then_close() {
        let mut picker = PickerState::default();
        assert!(!picker.is_open());

        let info = SlotInfo::single(Weekday::Wednesday, 4);
        picker.open(info, PointerPosition::new(120.0, 80.0));
        assert!(picker.is_open());
        assert_eq!(picker.slot_info(), Some(info));
        assert_eq!(picker.position(), Some(PointerPosition::new(120.0, 80.0)));

        assert_eq!(picker.close(), Some(info));
        assert_eq!(picker, PickerState::Closed);
        assert_eq!(picker.close(), None);
    }

    #[test]
    fn test_reopening_replaces_the_open_picker() {
        let mut picker = PickerState::default();
        picker.open(SlotInfo::single(Weekday::Monday, 1), PointerPosition::default());
        picker.open(SlotInfo::single(Weekday::Friday, 6), PointerPosition::new(5.0, 5.0));
        assert_eq!(picker.slot_info(), Some(SlotInfo::single(Weekday::Friday, 6)));
    }
}
