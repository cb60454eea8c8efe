//! Theme module for the egui timetable
//!
//! Defines the TimetableTheme colors and the conversions between
//! egui::Color32 and the hex strings stored on subjects.

use egui::Color32;

use crate::models::settings::Settings;

/// Colors used by the grid and dialogs
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Grid background behind the cells
    pub grid_background: Color32,

    /// Header row and day label column background
    pub header_background: Color32,

    /// Free cell background
    pub cell_background: Color32,

    /// Free cell background under the pointer (edit mode)
    pub cell_hover: Color32,

    /// Cell border color
    pub cell_border: Color32,

    /// Fill for slots whose subject has no color
    pub slot_background: Color32,

    /// Accent used for handles and the drag preview outline
    pub accent: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary text color (headers, hints)
    pub text_secondary: Color32,
}

impl TimetableTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            grid_background: Color32::from_rgb(255, 255, 255),
            header_background: Color32::from_rgb(236, 239, 244),
            cell_background: Color32::from_rgb(255, 255, 255),
            cell_hover: Color32::from_rgb(230, 240, 255),
            cell_border: Color32::from_rgb(220, 220, 220),
            slot_background: Color32::from_rgb(100, 150, 255),
            accent: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            grid_background: Color32::from_rgb(40, 40, 40),
            header_background: Color32::from_rgb(48, 50, 56),
            cell_background: Color32::from_rgb(40, 40, 40),
            cell_hover: Color32::from_rgb(50, 60, 80),
            cell_border: Color32::from_rgb(60, 60, 60),
            slot_background: Color32::from_rgb(70, 110, 200),
            accent: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Pick the theme named in settings, asking the OS when the user
    /// follows the system preference.
    pub fn for_settings(settings: &Settings) -> Self {
        let dark = if settings.use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => true,
                dark_light::Mode::Light => false,
                dark_light::Mode::Default => is_dark_name(&settings.theme),
            }
        } else {
            is_dark_name(&settings.theme)
        };

        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.cell_background;
        visuals.widgets.inactive.bg_fill = self.cell_background;
        visuals.widgets.hovered.bg_fill = self.cell_hover;
        visuals.widgets.active.bg_fill = self.cell_hover;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }

    /// Parse `#RGB` or `#RRGGBB` into a Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim().trim_start_matches('#');
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err("Hex color must be 3 or 6 characters".to_string()),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| "Invalid hex color".to_string())
        };
        Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

fn is_dark_name(name: &str) -> bool {
    name.to_lowercase().contains("dark")
}
