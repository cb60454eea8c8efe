use egui::{Align2, Color32, FontId, Painter, Rect};

use crate::models::slot::{Slot, SlotInfo};
use crate::models::subject::Subject;

mod palette;
pub mod subject_picker;
pub mod timetable_view;

pub use subject_picker::SubjectPicker;
pub use timetable_view::TimetableView;

/// Colors a slot block is drawn with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotStyle {
    pub fill: Color32,
    pub text: Color32,
    /// True while the slot is being resized
    pub previewing: bool,
}

/// Draws the content of one slot block. The grid owns placement, handles
/// and the delete affordance; a renderer only paints inside `rect`.
pub trait SlotRenderer {
    fn paint_slot(&self, painter: &Painter, rect: Rect, slot: &Slot, style: &SlotStyle);
}

/// Subject name centered on a rounded block.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlotRenderer;

impl SlotRenderer for DefaultSlotRenderer {
    fn paint_slot(&self, painter: &Painter, rect: Rect, slot: &Slot, style: &SlotStyle) {
        painter.rect_filled(rect, 4.0, style.fill);
        let label = if slot.span() > 1 {
            format!("{} (H{}–H{})", slot.subject_name, slot.start_of_period, slot.end_of_period)
        } else {
            slot.subject_name.clone()
        };
        painter
            .with_clip_rect(rect.shrink(2.0))
            .text(rect.center(), Align2::CENTER_CENTER, label, FontId::proportional(13.0), style.text);
    }
}

/// What the picker body reported this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Still choosing
    Open,
    Selected {
        subject_id: String,
        subject_name: String,
    },
    Dismissed,
}

/// Body of the creation picker shown over an empty cell.
pub trait PickerRenderer {
    fn show_picker(&mut self, ui: &mut egui::Ui, slot_info: SlotInfo, subjects: &[Subject]) -> PickerOutcome;

    /// Called whenever the picker closes so per-open state can be cleared.
    fn reset(&mut self) {}
}
