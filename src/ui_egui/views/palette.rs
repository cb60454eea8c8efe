use std::collections::HashMap;

use egui::Color32;

use crate::models::subject::Subject;
use crate::ui_egui::theme::TimetableTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Dark text on light fills, light text on dark fills.
pub(crate) fn text_on(fill: Color32) -> Color32 {
    let luminance =
        0.299 * f32::from(fill.r()) + 0.587 * f32::from(fill.g()) + 0.114 * f32::from(fill.b());
    if luminance > 150.0 {
        Color32::from_rgb(30, 30, 30)
    } else {
        Color32::WHITE
    }
}

#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub grid_bg: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
    pub day_text: Color32,
    pub cell_bg: Color32,
    pub cell_hover_bg: Color32,
    pub border: Color32,
    pub slot_bg: Color32,
    pub preview_outline: Color32,
    pub locked_cell_bg: Color32,
}

impl GridPalette {
    pub fn from_theme(theme: &TimetableTheme) -> Self {
        Self {
            grid_bg: theme.grid_background,
            header_bg: theme.header_background,
            header_text: theme.text_secondary,
            day_text: theme.text_primary,
            cell_bg: theme.cell_background,
            cell_hover_bg: theme.cell_hover,
            border: theme.cell_border,
            slot_bg: theme.slot_background,
            preview_outline: theme.accent,
            locked_cell_bg: with_alpha(theme.cell_border, if theme.is_dark { 60 } else { 90 }),
        }
    }
}

/// Fill color per subject id. Subjects without a (valid) color are absent
/// and fall back to the palette's slot color.
pub(crate) fn subject_colors(subjects: &[Subject]) -> HashMap<String, Color32> {
    subjects
        .iter()
        .filter_map(|subject| {
            let color = subject.color.as_deref()?;
            TimetableTheme::hex_to_color(color)
                .ok()
                .map(|c| (subject.id.clone(), c))
        })
        .collect()
}
