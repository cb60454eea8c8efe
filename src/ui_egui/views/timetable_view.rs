//! The weekly grid: header row, one row per weekday, slot blocks with
//! resize handles and a delete button, and the creation picker.
//!
//! All state lives in the [`TimetableEditor`]; the view turns egui input
//! into editor calls and paints whatever the editor holds.

use std::collections::HashMap;

use egui::{Align2, Color32, FontId, Id, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::{subject_colors, text_on, GridPalette};
use super::{
    DefaultSlotRenderer, PickerOutcome, PickerRenderer, SlotRenderer, SlotStyle, SubjectPicker,
};
use crate::models::slot::Slot;
use crate::models::subject::Subject;
use crate::models::weekday::Weekday;
use crate::services::timetable::{grid, PointerPosition, ResizeHandle, TimetableEditor};
use crate::ui_egui::resize::{draw_handles, HandleRects, HANDLE_CURSOR, HANDLE_SIZE};
use crate::ui_egui::theme::TimetableTheme;

const LABEL_COLUMN_WIDTH: f32 = 110.0;
const HEADER_HEIGHT: f32 = 28.0;
const ROW_HEIGHT: f32 = 56.0;
const SLOT_INSET: f32 = 2.0;
const DELETE_SIZE: f32 = 14.0;

pub struct TimetableView {
    id: Id,
    slot_renderer: Box<dyn SlotRenderer>,
    picker_renderer: Box<dyn PickerRenderer>,
    /// Picker was open last frame
    picker_open: bool,
}

impl Default for TimetableView {
    fn default() -> Self {
        Self::new("timetable")
    }
}

impl TimetableView {
    pub fn new(id_source: impl std::hash::Hash) -> Self {
        Self {
            id: Id::new(id_source),
            slot_renderer: Box::new(DefaultSlotRenderer),
            picker_renderer: Box::new(SubjectPicker::new()),
            picker_open: false,
        }
    }

    pub fn with_slot_renderer(mut self, renderer: impl SlotRenderer + 'static) -> Self {
        self.slot_renderer = Box::new(renderer);
        self
    }

    pub fn with_picker_renderer(mut self, renderer: impl PickerRenderer + 'static) -> Self {
        self.picker_renderer = Box::new(renderer);
        self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        editor: &mut TimetableEditor,
        subjects: &[Subject],
        theme: &TimetableTheme,
    ) {
        // A resize released last frame lands now.
        if editor.flush_pending() {
            ui.ctx().request_repaint();
        }

        let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));
        if escape && editor.cancel_resize() {
            log::debug!("Resize cancelled with Escape");
        }

        let palette = GridPalette::from_theme(theme);
        let colors = subject_colors(subjects);

        let total_width = ui.available_width();
        let row_width = (total_width - LABEL_COLUMN_WIDTH).max(0.0);
        editor.set_container_width(row_width);

        let rows: Vec<(Weekday, String, Vec<Slot>)> =
            grid::day_rows(editor.slots(), editor.number_of_hours())
                .into_iter()
                .map(|row| (row.day, row.label, row.slots.into_iter().cloned().collect()))
                .collect();

        let height = HEADER_HEIGHT + ROW_HEIGHT * rows.len() as f32;
        let (grid_rect, _) =
            ui.allocate_exact_size(Vec2::new(total_width, height), Sense::hover());
        ui.painter().rect_filled(grid_rect, 0.0, palette.grid_bg);
        self.paint_header(ui.painter(), grid_rect, editor, &palette);

        let mut picker_opened = false;
        for (index, (day, label, day_slots)) in rows.iter().enumerate() {
            let top = grid_rect.top() + HEADER_HEIGHT + ROW_HEIGHT * index as f32;
            let label_rect = Rect::from_min_size(
                Pos2::new(grid_rect.left(), top),
                Vec2::new(LABEL_COLUMN_WIDTH, ROW_HEIGHT),
            );
            let row_rect = Rect::from_min_size(
                Pos2::new(label_rect.right(), top),
                Vec2::new(row_width, ROW_HEIGHT),
            );

            ui.painter().rect_filled(label_rect, 0.0, palette.header_bg);
            ui.painter().text(
                label_rect.left_center() + Vec2::new(8.0, 0.0),
                Align2::LEFT_CENTER,
                label,
                FontId::proportional(14.0),
                palette.day_text,
            );

            picker_opened |= self.show_row(ui, editor, *day, row_rect, &palette);
            for slot in day_slots {
                self.show_slot(ui, editor, slot, row_rect, &palette, &colors);
            }
        }

        self.show_picker(ui, editor, subjects, picker_opened, escape);
    }

    fn paint_header(
        &self,
        painter: &Painter,
        grid_rect: Rect,
        editor: &TimetableEditor,
        palette: &GridPalette,
    ) {
        let header_rect =
            Rect::from_min_size(grid_rect.min, Vec2::new(grid_rect.width(), HEADER_HEIGHT));
        painter.rect_filled(header_rect, 0.0, palette.header_bg);

        let geometry = editor.geometry();
        let Some(hour_width) = geometry.hour_width() else {
            return;
        };
        let left = grid_rect.left() + LABEL_COLUMN_WIDTH;
        for (index, label) in grid::header_labels(editor.number_of_hours()).iter().enumerate() {
            let x = left + hour_width * index as f32;
            let cell = Rect::from_min_size(
                Pos2::new(x, grid_rect.top()),
                Vec2::new(hour_width, HEADER_HEIGHT),
            );
            painter.text(
                cell.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(12.0),
                palette.header_text,
            );
            painter.vline(x, cell.y_range(), Stroke::new(1.0, palette.border));
        }
    }

    /// Paint the cells of one day and route clicks on them. Returns whether
    /// the click opened the picker.
    fn show_row(
        &self,
        ui: &egui::Ui,
        editor: &mut TimetableEditor,
        day: Weekday,
        row_rect: Rect,
        palette: &GridPalette,
    ) -> bool {
        let geometry = *editor.geometry();
        let Some(hour_width) = geometry.hour_width() else {
            return false;
        };

        let sense = if editor.is_editable() {
            Sense::click()
        } else {
            Sense::hover()
        };
        let response = ui.interact(row_rect, self.id.with(("row", day.index())), sense);
        let hovered_period = response
            .hover_pos()
            .and_then(|pos| geometry.period_at(pos.x - row_rect.left()));
        let highlight = editor.is_editable() && editor.active_resize().is_none();

        for period in 1..=editor.number_of_hours() {
            let offset = geometry.period_offset(period).unwrap_or_default();
            let cell = Rect::from_min_size(
                Pos2::new(row_rect.left() + offset, row_rect.top()),
                Vec2::new(hour_width, ROW_HEIGHT),
            );
            let fill = if highlight
                && hovered_period == Some(period)
                && !editor.is_occupied(day, period)
            {
                palette.cell_hover_bg
            } else {
                palette.cell_bg
            };
            ui.painter().rect_filled(cell, 0.0, fill);
            ui.painter()
                .rect_stroke(cell, 0.0, Stroke::new(1.0, palette.border));
        }

        if !response.clicked() {
            return false;
        }
        match response.interact_pointer_pos() {
            Some(pos) => editor.click_at(
                day,
                pos.x - row_rect.left(),
                PointerPosition::new(pos.x, pos.y),
            ),
            None => false,
        }
    }

    fn show_slot(
        &self,
        ui: &egui::Ui,
        editor: &mut TimetableEditor,
        slot: &Slot,
        row_rect: Rect,
        palette: &GridPalette,
        colors: &HashMap<String, Color32>,
    ) {
        let preview = editor
            .active_resize()
            .filter(|active| active.slot_id() == slot.id)
            .map(|active| active.preview_periods());
        let (start, end) = preview.unwrap_or((slot.start_of_period, slot.end_of_period));

        let geometry = editor.geometry();
        let (Some(offset), Some(width)) = (geometry.period_offset(start), geometry.span_width(start, end))
        else {
            return;
        };
        let rect = Rect::from_min_size(
            Pos2::new(row_rect.left() + offset, row_rect.top()),
            Vec2::new(width, ROW_HEIGHT),
        )
        .shrink(SLOT_INSET);

        let fill = colors.get(&slot.subject_id).copied().unwrap_or(palette.slot_bg);
        let style = SlotStyle {
            fill,
            text: text_on(fill),
            previewing: preview.is_some(),
        };
        self.slot_renderer.paint_slot(ui.painter(), rect, slot, &style);
        if style.previewing {
            ui.painter()
                .rect_stroke(rect, 4.0, Stroke::new(2.0, palette.preview_outline));
        }

        if !editor.is_editable() {
            return;
        }

        let handles = HandleRects::for_slot(rect);
        let mut hovered = None;
        for handle in [ResizeHandle::Left, ResizeHandle::Right] {
            let response = ui
                .interact(
                    handles.get(handle),
                    self.id.with(("handle", slot.id.as_str(), handle)),
                    Sense::drag(),
                )
                .on_hover_cursor(HANDLE_CURSOR);
            if response.hovered() || response.dragged() {
                hovered = Some(handle);
            }

            if response.drag_started() {
                let origin = ui
                    .input(|i| i.pointer.press_origin())
                    .or_else(|| response.interact_pointer_pos());
                if let Some(pos) = origin {
                    editor.begin_resize(&slot.id, handle, pos.x);
                }
            }
            if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    editor.drag_resize(pos.x);
                }
            }
            if response.drag_stopped() {
                let released_at = response
                    .interact_pointer_pos()
                    .or_else(|| ui.input(|i| i.pointer.latest_pos()));
                match released_at {
                    Some(pos) => {
                        if editor.release_resize(pos.x) {
                            ui.ctx().request_repaint();
                        }
                    }
                    None => {
                        editor.cancel_resize();
                    }
                }
            }
        }
        draw_handles(ui, &handles, hovered, fill);

        if style.previewing || rect.width() < DELETE_SIZE + 2.0 * HANDLE_SIZE + 4.0 {
            return;
        }
        let delete_rect = Rect::from_min_size(
            Pos2::new(rect.right() - HANDLE_SIZE - DELETE_SIZE - 2.0, rect.top() + 2.0),
            Vec2::splat(DELETE_SIZE),
        );
        let response = ui
            .interact(delete_rect, self.id.with(("delete", slot.id.as_str())), Sense::click())
            .on_hover_text("Delete slot");
        let color = if response.hovered() {
            Color32::WHITE
        } else {
            style.text
        };
        ui.painter().text(
            delete_rect.center(),
            Align2::CENTER_CENTER,
            "×",
            FontId::proportional(13.0),
            color,
        );
        if response.clicked() {
            editor.delete_slot(&slot.id);
        }
    }

    fn show_picker(
        &mut self,
        ui: &egui::Ui,
        editor: &mut TimetableEditor,
        subjects: &[Subject],
        opened_this_frame: bool,
        escape: bool,
    ) {
        let picker = editor.picker();
        let (Some(slot_info), Some(position)) = (picker.slot_info(), picker.position()) else {
            // Closed elsewhere (occupied click, edit mode off, reload).
            if self.picker_open {
                self.picker_renderer.reset();
                self.picker_open = false;
            }
            return;
        };
        self.picker_open = true;

        let mut outcome = PickerOutcome::Open;
        let picker_renderer = &mut self.picker_renderer;
        let area = egui::Area::new(self.id.with("picker"))
            .order(egui::Order::Foreground)
            .fixed_pos(Pos2::new(position.x, position.y))
            .constrain(true)
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    outcome = picker_renderer.show_picker(ui, slot_info, subjects);
                });
            });

        if outcome == PickerOutcome::Open
            && !opened_this_frame
            && (escape || area.response.clicked_elsewhere())
        {
            outcome = PickerOutcome::Dismissed;
        }

        match outcome {
            PickerOutcome::Open => {}
            PickerOutcome::Selected {
                subject_id,
                subject_name,
            } => {
                if editor.select_subject(subject_id, &subject_name).is_none() {
                    log::debug!("Picker selection '{}' was not added", subject_name);
                }
                self.picker_renderer.reset();
                self.picker_open = false;
            }
            PickerOutcome::Dismissed => {
                editor.dismiss_picker();
                self.picker_renderer.reset();
                self.picker_open = false;
            }
        }
    }
}
