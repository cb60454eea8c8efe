// Test fixtures - reusable timetable data
// Provides consistent slots and editors across the integration tests

#![allow(dead_code)]

use instello_timetable::models::slot::Slot;
use instello_timetable::models::weekday::Weekday;
use instello_timetable::services::timetable::{TimetableConfig, TimetableEditor};

/// Slot with a fixed id so assertions can find it again
pub fn slot(id: &str, day: Weekday, start: u8, end: u8) -> Slot {
    Slot {
        id: id.to_string(),
        day_of_week: day,
        start_of_period: start,
        end_of_period: end,
        subject_id: format!("subject-{id}"),
        subject_name: format!("Subject {id}"),
    }
}

/// Editable 7-hour grid measured at 700px, so one period is 100px
pub fn editable_editor(slots: Vec<Slot>) -> TimetableEditor {
    let mut editor = TimetableEditor::new(
        TimetableConfig {
            number_of_hours: 7,
            editable: true,
        },
        slots,
    );
    editor.set_container_width(700.0);
    editor
}

/// True when no two slots on the same day share a period
pub fn no_overlaps(slots: &[Slot]) -> bool {
    slots.iter().enumerate().all(|(i, a)| {
        slots[i + 1..]
            .iter()
            .all(|b| a.day_of_week != b.day_of_week || a.end_of_period < b.start_of_period || b.end_of_period < a.start_of_period)
    })
}

/// True when every slot sits inside `1..=number_of_hours` with start <= end
pub fn spans_valid(slots: &[Slot], number_of_hours: u8) -> bool {
    slots.iter().all(|s| {
        1 <= s.start_of_period && s.start_of_period <= s.end_of_period && s.end_of_period <= number_of_hours
    })
}
