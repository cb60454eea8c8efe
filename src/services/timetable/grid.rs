//! Grid layout for the timetable: one row per weekday, one column per period.
//!
//! Pure description of what goes where; the egui view turns it into rects.

use crate::models::slot::Slot;
use crate::models::weekday::Weekday;

/// Header labels for the period columns: "H1", "H2", ...
pub fn header_labels(number_of_hours: u8) -> Vec<String> {
    (1..=number_of_hours).map(|h| format!("H{h}")).collect()
}

/// Grid columns a slot occupies, as a half-open `[start, end + 1)` line range.
pub fn column_span(slot: &Slot) -> (u8, u8) {
    (slot.start_of_period, slot.end_of_period + 1)
}

/// Slots on `day`, sorted left to right.
pub fn slots_for_day(slots: &[Slot], day: Weekday) -> Vec<&Slot> {
    let mut day_slots: Vec<&Slot> = slots.iter().filter(|s| s.day_of_week == day).collect();
    day_slots.sort_by_key(|s| s.start_of_period);
    day_slots
}

/// True if any slot on `day` covers `period`.
pub fn is_occupied(slots: &[Slot], day: Weekday, period: u8) -> bool {
    slots
        .iter()
        .any(|s| s.day_of_week == day && s.covers(period))
}

/// Periods on `day` not covered by any slot.
pub fn free_periods(slots: &[Slot], day: Weekday, number_of_hours: u8) -> Vec<u8> {
    (1..=number_of_hours)
        .filter(|period| !is_occupied(slots, day, *period))
        .collect()
}

/// One row of the grid.
#[derive(Debug, Clone)]
pub struct DayRow<'a> {
    pub day: Weekday,
    pub label: String,
    pub slots: Vec<&'a Slot>,
    /// Clickable empty cells
    pub free_periods: Vec<u8>,
}

/// Rows for every weekday, Monday first.
pub fn day_rows(slots: &[Slot], number_of_hours: u8) -> Vec<DayRow<'_>> {
    Weekday::ALL
        .iter()
        .map(|&day| DayRow {
            day,
            label: day.name(),
            slots: slots_for_day(slots, day),
            free_periods: free_periods(slots, day, number_of_hours),
        })
        .collect()
}
