// Integration tests for the timetable editor
// Drives the editor the way the grid view does: clicks, drags and releases

mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use fixtures::{editable_editor, slot};
use instello_timetable::models::slot::{Slot, SlotInfo};
use instello_timetable::models::weekday::Weekday;
use instello_timetable::services::timetable::{PointerPosition, ResizeHandle, TimetableEditor};
use pretty_assertions::assert_eq;

fn record_changes(editor: &mut TimetableEditor) -> Rc<RefCell<Vec<Vec<Slot>>>> {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    editor.on_change(move |slots| sink.borrow_mut().push(slots.to_vec()));
    calls
}

#[test]
fn test_right_handle_extends_to_last_period() {
    let mut editor = editable_editor(vec![
        slot("a", Weekday::Monday, 2, 4),
        slot("b", Weekday::Monday, 5, 5),
    ]);

    let bounds = editor.resize_bounds("b").unwrap();
    assert_eq!(bounds.max_start_period, 5);
    assert_eq!(bounds.max_end_period, 7);

    assert!(editor.begin_resize("b", ResizeHandle::Right, 550.0));
    editor.drag_resize(750.0);
    assert!(editor.release_resize(750.0));
    assert!(editor.flush_pending());

    assert_eq!(editor.slot("b").unwrap().end_of_period, 7);
    assert_eq!(editor.slot("a").unwrap().end_of_period, 4);
}

#[test]
fn test_slot_between_neighbors_is_locked() {
    let mut editor = editable_editor(vec![
        slot("a", Weekday::Monday, 1, 2),
        slot("b", Weekday::Monday, 4, 5),
        slot("c", Weekday::Monday, 3, 3),
    ]);
    let calls = record_changes(&mut editor);

    let bounds = editor.resize_bounds("c").unwrap();
    assert_eq!(bounds.max_start_period, 3);
    assert_eq!(bounds.max_end_period, 3);
    assert!(bounds.is_locked(editor.slot("c").unwrap()));

    assert!(!editor.resize_slot("c", ResizeHandle::Left, -2));
    assert!(!editor.resize_slot("c", ResizeHandle::Right, 2));

    assert!(editor.begin_resize("c", ResizeHandle::Right, 300.0));
    assert_eq!(editor.drag_resize(600.0).map(|d| d.columns), Some(0));
    assert!(!editor.release_resize(600.0));
    assert!(!editor.flush_pending());

    assert_eq!(editor.slot("c").unwrap().info(), SlotInfo::single(Weekday::Monday, 3));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_click_empty_cell_then_pick_subject() {
    let mut editor = editable_editor(vec![]);
    let calls = record_changes(&mut editor);
    let day = Weekday::from_index(3).unwrap();
    let anchor = PointerPosition::new(412.0, 96.0);

    assert!(editor.click_at(day, 350.0, anchor));
    assert_eq!(
        editor.picker().slot_info(),
        Some(SlotInfo {
            day_of_week: Weekday::Wednesday,
            start_of_period: 4,
            end_of_period: 4,
        })
    );
    assert_eq!(editor.picker().position(), Some(anchor));

    let id = editor.select_subject("physics", "Physics").unwrap();
    assert!(!editor.picker().is_open());
    assert_eq!(editor.slots().len(), 1);

    let created = editor.slot(&id).unwrap();
    assert_eq!(created.info(), SlotInfo::single(Weekday::Wednesday, 4));
    assert_eq!(created.subject_name, "Physics");

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], editor.slots().to_vec());
}

#[test]
fn test_drag_of_two_and_a_half_columns_commits_three() {
    let mut editor = editable_editor(vec![slot("a", Weekday::Tuesday, 1, 1)]);
    let calls = record_changes(&mut editor);

    assert!(editor.begin_resize("a", ResizeHandle::Right, 80.0));
    let live = editor.drag_resize(330.0).unwrap();
    assert_eq!(live.columns, 3);
    assert_eq!(live.pixels, 300.0);
    assert_eq!(editor.active_resize().unwrap().preview_periods(), (1, 4));

    assert!(editor.release_resize(330.0));
    assert!(editor.flush_pending());
    assert_eq!(editor.slot("a").unwrap().end_of_period, 4);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_drag_is_clamped_by_neighbor() {
    let mut editor = editable_editor(vec![
        slot("a", Weekday::Tuesday, 1, 2),
        slot("b", Weekday::Tuesday, 4, 5),
    ]);

    assert!(editor.begin_resize("a", ResizeHandle::Right, 200.0));
    assert_eq!(editor.drag_resize(450.0).map(|d| d.columns), Some(1));
    assert!(editor.release_resize(450.0));
    assert!(editor.flush_pending());

    assert_eq!(editor.slot("a").unwrap().end_of_period, 3);
    assert_eq!(editor.slot("b").unwrap().start_of_period, 4);
}

#[test]
fn test_zero_delta_drag_is_a_no_op() {
    let mut editor = editable_editor(vec![slot("a", Weekday::Friday, 2, 3)]);
    let before = editor.slots().to_vec();
    let calls = record_changes(&mut editor);

    for handle in [ResizeHandle::Left, ResizeHandle::Right] {
        assert!(editor.begin_resize("a", handle, 240.0));
        editor.drag_resize(290.0);
        assert!(!editor.release_resize(240.0));
        assert!(!editor.flush_pending());
    }

    assert!(!editor.resize_slot("a", ResizeHandle::Right, 0));
    assert_eq!(editor.slots(), before.as_slice());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_occupied_cell_never_opens_picker() {
    let mut editor = editable_editor(vec![slot("a", Weekday::Thursday, 2, 5)]);
    let calls = record_changes(&mut editor);

    for period in 2..=5 {
        assert!(!editor.click_period(Weekday::Thursday, period, PointerPosition::default()));
        assert!(!editor.picker().is_open());
    }
    assert_eq!(editor.select_subject("x", "Latin"), None);
    assert!(!editor.add_slot(slot("b", Weekday::Thursday, 4, 4)));

    assert_eq!(editor.slots().len(), 1);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_left_handle_clamps_to_exact_bound() {
    let mut editor = editable_editor(vec![
        slot("a", Weekday::Saturday, 1, 2),
        slot("b", Weekday::Saturday, 6, 7),
    ]);

    assert!(editor.resize_slot("b", ResizeHandle::Left, -10));
    assert_eq!(editor.slot("b").unwrap().start_of_period, 3);

    assert!(!editor.resize_slot("b", ResizeHandle::Left, -10));
    assert_eq!(editor.slot("b").unwrap().start_of_period, 3);
}

#[test]
fn test_escape_cancels_drag_without_commit() {
    let mut editor = editable_editor(vec![slot("a", Weekday::Monday, 3, 3)]);
    let calls = record_changes(&mut editor);

    assert!(editor.begin_resize("a", ResizeHandle::Left, 300.0));
    editor.drag_resize(100.0);
    assert_eq!(editor.active_resize().unwrap().preview_periods(), (1, 3));

    assert!(editor.cancel_resize());
    assert!(!editor.release_resize(100.0));
    assert!(!editor.flush_pending());

    assert_eq!(editor.slot("a").unwrap().info(), SlotInfo::single(Weekday::Monday, 3));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_read_only_grid_rejects_every_edit() {
    let mut editor = editable_editor(vec![slot("a", Weekday::Monday, 1, 2)]);
    editor.set_editable(false);
    let calls = record_changes(&mut editor);

    assert!(!editor.click_period(Weekday::Monday, 5, PointerPosition::default()));
    assert!(!editor.begin_resize("a", ResizeHandle::Right, 150.0));
    assert!(!editor.resize_slot("a", ResizeHandle::Right, 1));
    assert!(!editor.delete_slot("a"));
    assert!(calls.borrow().is_empty());
}
