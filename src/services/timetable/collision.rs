//! Resize limits for a slot, derived from its neighbors on the same day.

use crate::models::slot::Slot;

/// How far a slot's boundaries may move without touching a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeBounds {
    /// Smallest legal `start_of_period` (left edge limit)
    pub max_start_period: u8,
    /// Largest legal `end_of_period` (right edge limit)
    pub max_end_period: u8,
}

impl ResizeBounds {
    /// Clamp a proposed start to `[max_start_period, slot.end_of_period]`.
    pub fn clamp_start(&self, slot: &Slot, proposed: i32) -> u8 {
        let low = i32::from(self.max_start_period.min(slot.end_of_period));
        proposed.clamp(low, i32::from(slot.end_of_period)) as u8
    }

    /// Clamp a proposed end to `[slot.start_of_period, max_end_period]`.
    pub fn clamp_end(&self, slot: &Slot, proposed: i32) -> u8 {
        let high = i32::from(self.max_end_period.max(slot.start_of_period));
        proposed.clamp(i32::from(slot.start_of_period), high) as u8
    }

    /// True when neither edge can move: neighbors (or grid edges) touch both
    /// sides and the slot is already one period wide.
    pub fn is_locked(&self, slot: &Slot) -> bool {
        slot.span() == 1
            && self.max_start_period >= slot.start_of_period
            && self.max_end_period <= slot.end_of_period
    }
}

/// Compute the resize limits for `current` among `slots`.
///
/// Slots on other days and the slot itself (matched by id) are ignored.
pub fn resize_bounds(current: &Slot, slots: &[Slot], number_of_hours: u8) -> ResizeBounds {
    let mut same_day: Vec<&Slot> = slots
        .iter()
        .filter(|s| s.day_of_week == current.day_of_week && s.id != current.id)
        .collect();
    same_day.sort_by_key(|s| s.start_of_period);

    let mut max_start = 1;
    let mut max_end = number_of_hours;

    for slot in same_day {
        if slot.end_of_period < current.start_of_period {
            max_start = max_start.max(slot.end_of_period + 1);
        }

        if slot.start_of_period > current.end_of_period {
            max_end = max_end.min(slot.start_of_period - 1);
            // Sorted by start, so this is the nearest right neighbor.
            break;
        }
    }

    ResizeBounds {
        max_start_period: max_start,
        max_end_period: max_end,
    }
}
