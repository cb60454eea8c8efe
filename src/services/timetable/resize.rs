// Slot Resize Binder
//
// Turns a pointer drag on a slot's edge into a period change.
// - Left handle: moves start_of_period
// - Right handle: moves end_of_period
// The live delta is snapped to whole columns and clamped against neighbors
// while dragging; the new boundary is only produced on release.

use super::collision::ResizeBounds;
use super::geometry::SlotGeometry;
use crate::models::slot::Slot;

/// Which edge of the slot is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    /// Left edge - adjusts start period
    Left,
    /// Right edge - adjusts end period
    Right,
}

/// Snapped, clamped movement shown while the pointer is down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LiveDelta {
    /// Whole columns the edge has moved (negative = left)
    pub columns: i32,
    /// `columns` converted back to pixels for the preview
    pub pixels: f32,
}

/// A finished resize, ready to apply to the collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizeCommit {
    pub slot_id: String,
    pub handle: ResizeHandle,
    pub start_of_period: u8,
    pub end_of_period: u8,
}

/// State captured when the drag began
#[derive(Clone, Debug)]
pub struct ActiveResize {
    slot: Slot,
    handle: ResizeHandle,
    origin_x: f32,
    bounds: ResizeBounds,
    live: LiveDelta,
}

impl ActiveResize {
    pub fn slot_id(&self) -> &str {
        &self.slot.id
    }

    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }

    pub fn live(&self) -> LiveDelta {
        self.live
    }

    pub fn bounds(&self) -> ResizeBounds {
        self.bounds
    }

    /// Periods the slot would cover if released now.
    pub fn preview_periods(&self) -> (u8, u8) {
        self.periods_for(self.live.columns)
    }

    fn periods_for(&self, columns: i32) -> (u8, u8) {
        let slot = &self.slot;
        match self.handle {
            ResizeHandle::Left => (
                self.bounds
                    .clamp_start(slot, i32::from(slot.start_of_period) + columns),
                slot.end_of_period,
            ),
            ResizeHandle::Right => (
                slot.start_of_period,
                self.bounds
                    .clamp_end(slot, i32::from(slot.end_of_period) + columns),
            ),
        }
    }

    /// Snap `pointer_x` to columns and clamp the result to the legal range.
    fn clamped_columns(&self, pointer_x: f32, geometry: &SlotGeometry) -> Option<i32> {
        let raw = geometry.pixels_to_column_delta(pointer_x - self.origin_x)?;
        let (start, end) = self.periods_for(raw);
        Some(match self.handle {
            ResizeHandle::Left => i32::from(start) - i32::from(self.slot.start_of_period),
            ResizeHandle::Right => i32::from(end) - i32::from(self.slot.end_of_period),
        })
    }
}

#[derive(Clone, Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(ActiveResize),
}

/// Drag state machine for one timetable: `Idle -> Dragging -> Idle`.
#[derive(Clone, Debug, Default)]
pub struct ResizeBinder {
    state: DragState,
}

impl ResizeBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `handle` of `slot`. Refused when the grid is read-only,
    /// the row has not been measured, or another drag is in progress.
    pub fn begin(
        &mut self,
        slot: &Slot,
        handle: ResizeHandle,
        pointer_x: f32,
        bounds: ResizeBounds,
        editable: bool,
        geometry: &SlotGeometry,
    ) -> bool {
        if !editable || !geometry.is_measured() || !pointer_x.is_finite() || self.is_dragging() {
            return false;
        }

        self.state = DragState::Dragging(ActiveResize {
            slot: slot.clone(),
            handle,
            origin_x: pointer_x,
            bounds,
            live: LiveDelta::default(),
        });
        true
    }

    /// Update the live delta from the current pointer position.
    pub fn drag_to(&mut self, pointer_x: f32, geometry: &SlotGeometry) -> Option<LiveDelta> {
        let DragState::Dragging(active) = &mut self.state else {
            return None;
        };
        let columns = active.clamped_columns(pointer_x, geometry)?;
        active.live = LiveDelta {
            columns,
            pixels: geometry.column_to_pixels(columns).unwrap_or(0.0),
        };
        Some(active.live)
    }

    /// End the drag. Returns the new boundaries, or `None` when the edge did
    /// not move (taps, sub-half-column jitter, drags clamped to zero) or the
    /// row lost its measurement mid-drag.
    pub fn release(&mut self, pointer_x: f32, geometry: &SlotGeometry) -> Option<ResizeCommit> {
        let DragState::Dragging(active) = std::mem::take(&mut self.state) else {
            return None;
        };

        let columns = active.clamped_columns(pointer_x, geometry)?;
        if columns == 0 {
            return None;
        }

        let (start_of_period, end_of_period) = active.periods_for(columns);
        Some(ResizeCommit {
            slot_id: active.slot.id,
            handle: active.handle,
            start_of_period,
            end_of_period,
        })
    }

    /// Drop the drag without committing. Returns whether a drag was active.
    pub fn cancel(&mut self) -> bool {
        matches!(std::mem::take(&mut self.state), DragState::Dragging(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn active(&self) -> Option<&ActiveResize> {
        match &self.state {
            DragState::Dragging(active) => Some(active),
            DragState::Idle => None,
        }
    }

    /// Check if resizing a specific slot
    pub fn is_resizing_slot(&self, slot_id: &str) -> bool {
        self.active().is_some_and(|a| a.slot_id() == slot_id)
    }
}
