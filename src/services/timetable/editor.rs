//! Working copy of a timetable and the edits users make to it.
//!
//! The editor owns an in-memory slot collection, the picker and the resize
//! binder for one timetable. Every create, resize or delete that changes the
//! collection is reported to the registered [`SlotChangeListener`] with the
//! full updated collection; persisting it is the host's job.
//!
//! Invariants held after every operation:
//! - `1 <= start_of_period <= end_of_period <= number_of_hours` for all slots
//! - no two slots on the same day share a period

use super::collision::{resize_bounds, ResizeBounds};
use super::geometry::SlotGeometry;
use super::grid;
use super::picker::{PickerState, PointerPosition};
use super::resize::{ActiveResize, LiveDelta, ResizeBinder, ResizeCommit, ResizeHandle};
use crate::models::settings::{DEFAULT_HOURS, MAX_HOURS, MIN_HOURS};
use crate::models::slot::{Slot, SlotInfo};
use crate::models::weekday::Weekday;

/// Options a host passes when mounting a timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimetableConfig {
    /// Total columns per day
    pub number_of_hours: u8,
    /// Gates every mutation affordance
    pub editable: bool,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            number_of_hours: DEFAULT_HOURS,
            editable: false,
        }
    }
}

/// Receives the full slot collection after every change.
#[cfg_attr(test, mockall::automock)]
pub trait SlotChangeListener {
    fn slots_changed(&mut self, slots: &[Slot]);
}

struct ClosureListener<F>(F);

impl<F: FnMut(&[Slot])> SlotChangeListener for ClosureListener<F> {
    fn slots_changed(&mut self, slots: &[Slot]) {
        (self.0)(slots)
    }
}

pub struct TimetableEditor {
    config: TimetableConfig,
    slots: Vec<Slot>,
    geometry: SlotGeometry,
    binder: ResizeBinder,
    picker: PickerState,
    /// Released resize waiting for the next frame
    pending_commit: Option<ResizeCommit>,
    listener: Option<Box<dyn SlotChangeListener>>,
}

impl std::fmt::Debug for TimetableEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimetableEditor")
            .field("config", &self.config)
            .field("slots", &self.slots)
            .field("geometry", &self.geometry)
            .field("picker", &self.picker)
            .field("pending_commit", &self.pending_commit)
            .finish_non_exhaustive()
    }
}

impl TimetableEditor {
    /// Create an editor over `slots`. Slots without ids get one; slots that
    /// are out of bounds or overlap an earlier slot are dropped.
    pub fn new(config: TimetableConfig, slots: Vec<Slot>) -> Self {
        let config = TimetableConfig {
            number_of_hours: config.number_of_hours.clamp(MIN_HOURS, MAX_HOURS),
            ..config
        };
        Self {
            slots: sanitize(slots, config.number_of_hours),
            geometry: SlotGeometry::new(config.number_of_hours),
            config,
            binder: ResizeBinder::new(),
            picker: PickerState::default(),
            pending_commit: None,
            listener: None,
        }
    }

    /// Register the change callback, replacing any previous one.
    pub fn set_listener(&mut self, listener: Box<dyn SlotChangeListener>) {
        self.listener = Some(listener);
    }

    /// Register a closure as the change callback.
    pub fn on_change(&mut self, callback: impl FnMut(&[Slot]) + 'static) {
        self.set_listener(Box::new(ClosureListener(callback)));
    }

    pub fn config(&self) -> TimetableConfig {
        self.config
    }

    pub fn number_of_hours(&self) -> u8 {
        self.config.number_of_hours
    }

    pub fn is_editable(&self) -> bool {
        self.config.editable
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    pub fn slots_for_day(&self, day: Weekday) -> Vec<&Slot> {
        grid::slots_for_day(&self.slots, day)
    }

    pub fn is_occupied(&self, day: Weekday, period: u8) -> bool {
        grid::is_occupied(&self.slots, day, period)
    }

    pub fn geometry(&self) -> &SlotGeometry {
        &self.geometry
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    /// Replace the collection from the host without notifying the listener.
    /// Any open picker or drag is dropped since it may refer to stale slots.
    pub fn replace_slots(&mut self, slots: Vec<Slot>) {
        self.slots = sanitize(slots, self.config.number_of_hours);
        self.binder.cancel();
        self.pending_commit = None;
        self.picker.close();
    }

    /// Toggle edit mode. Leaving edit mode closes the picker and ends any drag.
    pub fn set_editable(&mut self, editable: bool) {
        self.config.editable = editable;
        if !editable {
            self.picker.close();
            self.binder.cancel();
            self.pending_commit = None;
        }
    }

    /// Change the period count. Refused if out of range or if an existing
    /// slot would fall outside the new bound.
    pub fn set_number_of_hours(&mut self, number_of_hours: u8) -> bool {
        if !(MIN_HOURS..=MAX_HOURS).contains(&number_of_hours) {
            log::warn!("Ignoring out of range number of hours: {}", number_of_hours);
            return false;
        }
        if let Some(slot) = self.slots.iter().find(|s| s.end_of_period > number_of_hours) {
            log::warn!(
                "Cannot reduce hours to {}: slot '{}' on {} ends at period {}",
                number_of_hours,
                slot.subject_name,
                slot.day_of_week,
                slot.end_of_period
            );
            return false;
        }
        self.config.number_of_hours = number_of_hours;
        self.geometry.set_number_of_hours(number_of_hours);
        self.picker.close();
        self.binder.cancel();
        self.pending_commit = None;
        true
    }

    /// Record the measured width of a day row. An unusable width disables
    /// resizing and drops any drag in progress.
    pub fn set_container_width(&mut self, width: f32) -> bool {
        let measured = self.geometry.measure(width);
        if !measured && self.binder.cancel() {
            log::debug!("Row width lost during drag; resize discarded");
        }
        measured
    }

    // ---- creation -------------------------------------------------------

    /// Click on `period` of `day`. Opens the picker on a free cell in edit
    /// mode; clicking an occupied cell closes any open picker instead.
    pub fn click_period(&mut self, day: Weekday, period: u8, position: PointerPosition) -> bool {
        if !self.config.editable || period < 1 || period > self.config.number_of_hours {
            return false;
        }
        if self.is_occupied(day, period) {
            self.picker.close();
            return false;
        }
        self.picker.open(SlotInfo::single(day, period), position);
        true
    }

    /// Click at `x` pixels from the left edge of `day`'s row.
    pub fn click_at(&mut self, day: Weekday, x: f32, position: PointerPosition) -> bool {
        match self.geometry.period_at(x) {
            Some(period) => self.click_period(day, period, position),
            None => false,
        }
    }

    /// Confirm the picker with a subject. Creates a one-period slot at the
    /// picked cell and closes the picker. Returns the new slot's id.
    pub fn select_subject(
        &mut self,
        subject_id: impl Into<String>,
        subject_name: impl Into<String>,
    ) -> Option<String> {
        let slot_info = self.picker.close()?;
        let slot = slot_info.into_slot(subject_id, subject_name);
        let id = slot.id.clone();
        self.add_slot(slot).then_some(id)
    }

    /// Close the picker without creating anything.
    pub fn dismiss_picker(&mut self) {
        self.picker.close();
    }

    /// Insert a slot. Refused outside edit mode, or if the slot is invalid
    /// or overlaps another slot.
    pub fn add_slot(&mut self, mut slot: Slot) -> bool {
        if !self.config.editable {
            return false;
        }
        slot.ensure_id();
        if let Err(err) = slot.validate(self.config.number_of_hours) {
            log::warn!("Rejected slot: {}", err);
            return false;
        }
        if self
            .slots
            .iter()
            .any(|s| s.id == slot.id || s.overlaps(&slot))
        {
            log::debug!(
                "Rejected slot on {} periods {}..={}: cell occupied",
                slot.day_of_week,
                slot.start_of_period,
                slot.end_of_period
            );
            return false;
        }

        log::debug!(
            "Created slot '{}' on {} period {}",
            slot.subject_name,
            slot.day_of_week,
            slot.start_of_period
        );
        self.slots.push(slot);
        self.notify();
        true
    }

    // ---- deletion -------------------------------------------------------

    /// Remove a slot immediately. Returns whether anything was removed.
    pub fn delete_slot(&mut self, slot_id: &str) -> bool {
        if !self.config.editable {
            return false;
        }
        let before = self.slots.len();
        self.slots.retain(|s| s.id != slot_id);
        if self.slots.len() == before {
            return false;
        }
        if self.binder.is_resizing_slot(slot_id) {
            self.binder.cancel();
        }
        if self
            .pending_commit
            .as_ref()
            .is_some_and(|c| c.slot_id == slot_id)
        {
            self.pending_commit = None;
        }
        log::debug!("Deleted slot {}", slot_id);
        self.notify();
        true
    }

    // ---- resizing -------------------------------------------------------

    pub fn resize_bounds(&self, slot_id: &str) -> Option<ResizeBounds> {
        let slot = self.slot(slot_id)?;
        Some(resize_bounds(slot, &self.slots, self.config.number_of_hours))
    }

    /// Press on a resize handle.
    pub fn begin_resize(&mut self, slot_id: &str, handle: ResizeHandle, pointer_x: f32) -> bool {
        let Some(slot) = self.slot(slot_id).cloned() else {
            return false;
        };
        let bounds = resize_bounds(&slot, &self.slots, self.config.number_of_hours);
        self.binder.begin(
            &slot,
            handle,
            pointer_x,
            bounds,
            self.config.editable,
            &self.geometry,
        )
    }

    /// Pointer moved while a handle is held.
    pub fn drag_resize(&mut self, pointer_x: f32) -> Option<LiveDelta> {
        self.binder.drag_to(pointer_x, &self.geometry)
    }

    /// Pointer released. The live delta resets at once; the new boundary is
    /// queued and applied by the next [`flush_pending`](Self::flush_pending).
    /// Returns whether a commit was queued.
    pub fn release_resize(&mut self, pointer_x: f32) -> bool {
        match self.binder.release(pointer_x, &self.geometry) {
            Some(commit) => {
                self.pending_commit = Some(commit);
                true
            }
            None => false,
        }
    }

    /// Abandon the current drag without changing anything.
    pub fn cancel_resize(&mut self) -> bool {
        self.binder.cancel()
    }

    pub fn active_resize(&self) -> Option<&ActiveResize> {
        self.binder.active()
    }

    pub fn has_pending_commit(&self) -> bool {
        self.pending_commit.is_some()
    }

    /// Apply a queued resize. Runs at most once per released drag.
    pub fn flush_pending(&mut self) -> bool {
        let Some(commit) = self.pending_commit.take() else {
            return false;
        };
        let Some(slot) = self.slot(&commit.slot_id) else {
            return false;
        };
        let delta = match commit.handle {
            ResizeHandle::Left => {
                i32::from(commit.start_of_period) - i32::from(slot.start_of_period)
            }
            ResizeHandle::Right => i32::from(commit.end_of_period) - i32::from(slot.end_of_period),
        };
        self.resize_slot(&commit.slot_id, commit.handle, delta)
    }

    /// Move one edge of a slot by `column_delta` periods, clamped to the grid
    /// and its neighbors. Notifies only if the slot actually changed.
    pub fn resize_slot(&mut self, slot_id: &str, handle: ResizeHandle, column_delta: i32) -> bool {
        if !self.config.editable || column_delta == 0 {
            return false;
        }
        let Some(index) = self.slots.iter().position(|s| s.id == slot_id) else {
            return false;
        };

        let bounds = resize_bounds(&self.slots[index], &self.slots, self.config.number_of_hours);
        let slot = &mut self.slots[index];
        let (old_start, old_end) = (slot.start_of_period, slot.end_of_period);
        match handle {
            ResizeHandle::Left => {
                slot.start_of_period =
                    bounds.clamp_start(slot, i32::from(slot.start_of_period) + column_delta);
            }
            ResizeHandle::Right => {
                slot.end_of_period =
                    bounds.clamp_end(slot, i32::from(slot.end_of_period) + column_delta);
            }
        }

        if (slot.start_of_period, slot.end_of_period) == (old_start, old_end) {
            return false;
        }
        log::debug!(
            "Resized slot '{}' on {}: {}..={} -> {}..={}",
            slot.subject_name,
            slot.day_of_week,
            old_start,
            old_end,
            slot.start_of_period,
            slot.end_of_period
        );
        self.notify();
        true
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.slots_changed(&self.slots);
        }
    }
}

/// Assign missing ids and drop slots that break the grid invariants.
fn sanitize(slots: Vec<Slot>, number_of_hours: u8) -> Vec<Slot> {
    let mut accepted: Vec<Slot> = Vec::with_capacity(slots.len());
    for mut slot in slots {
        slot.ensure_id();
        if let Err(err) = slot.validate(number_of_hours) {
            log::warn!("Dropping slot {}: {}", slot.id, err);
            continue;
        }
        if accepted.iter().any(|s| s.id == slot.id) {
            log::warn!("Dropping slot with duplicate id {}", slot.id);
            continue;
        }
        if let Some(existing) = accepted.iter().find(|s| s.overlaps(&slot)) {
            log::warn!(
                "Dropping slot '{}' on {}: overlaps '{}'",
                slot.subject_name,
                slot.day_of_week,
                existing.subject_name
            );
            continue;
        }
        accepted.push(slot);
    }
    accepted
}
