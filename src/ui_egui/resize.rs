// Slot resize handles
//
// Hit zones and drawing for the left/right handles on a slot block.
// The drag itself is tracked by the editor's ResizeBinder; this module
// only deals in rects and paint.

use egui::{Color32, CursorIcon, Pos2, Rect, Vec2};

use crate::services::timetable::ResizeHandle;

/// Width of the resize handle hit area
pub const HANDLE_SIZE: f32 = 8.0;
/// Visual size of the handle circle
pub const HANDLE_VISUAL_SIZE: f32 = 6.0;

/// Both handles move horizontally
pub const HANDLE_CURSOR: CursorIcon = CursorIcon::ResizeHorizontal;

/// Hit zones for the two handles of one slot block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleRects {
    pub left: Rect,
    pub right: Rect,
}

impl HandleRects {
    /// Handles sit inside the block's left and right edges. Narrow blocks
    /// split their width between the two so they never overlap.
    pub fn for_slot(slot_rect: Rect) -> Self {
        let width = HANDLE_SIZE.min(slot_rect.width() / 2.0);
        let height = slot_rect.height();

        Self {
            left: Rect::from_min_size(slot_rect.left_top(), Vec2::new(width, height)),
            right: Rect::from_min_size(
                Pos2::new(slot_rect.right() - width, slot_rect.top()),
                Vec2::new(width, height),
            ),
        }
    }

    /// Check if a point hits a handle and return which one
    pub fn hit_test(&self, pos: Pos2) -> Option<ResizeHandle> {
        if self.left.contains(pos) {
            Some(ResizeHandle::Left)
        } else if self.right.contains(pos) {
            Some(ResizeHandle::Right)
        } else {
            None
        }
    }

    pub fn get(&self, handle: ResizeHandle) -> Rect {
        match handle {
            ResizeHandle::Left => self.left,
            ResizeHandle::Right => self.right,
        }
    }
}

/// Draw both handles of a slot
pub fn draw_handles(
    ui: &egui::Ui,
    handles: &HandleRects,
    hovered_handle: Option<ResizeHandle>,
    color: Color32,
) {
    for handle in [ResizeHandle::Left, ResizeHandle::Right] {
        let rect = handles.get(handle);
        let is_hovered = hovered_handle == Some(handle);
        let center = match handle {
            ResizeHandle::Left => Pos2::new(rect.left() + HANDLE_VISUAL_SIZE / 2.0 + 1.0, rect.center().y),
            ResizeHandle::Right => Pos2::new(rect.right() - HANDLE_VISUAL_SIZE / 2.0 - 1.0, rect.center().y),
        };

        let radius = if is_hovered {
            HANDLE_VISUAL_SIZE / 2.0 + 1.0
        } else {
            HANDLE_VISUAL_SIZE / 2.0
        };

        ui.painter().circle_filled(
            center,
            radius,
            if is_hovered {
                Color32::WHITE
            } else {
                Color32::from_rgba_unmultiplied(
                    color.r().saturating_add(60),
                    color.g().saturating_add(60),
                    color.b().saturating_add(60),
                    color.a(),
                )
            },
        );
        ui.painter()
            .circle_stroke(center, radius, egui::Stroke::new(1.0, color.linear_multiply(0.6)));
    }
}
