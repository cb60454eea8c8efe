use crate::models::settings::{Settings, MAX_HOURS, MIN_HOURS};
use crate::services::database::Database;
use crate::services::settings::SettingsService;
use egui::{Color32, RichText};

const THEMES: [&str; 2] = ["Light", "Dark"];

pub struct SettingsDialogResponse {
    pub saved: bool,
}

/// Check a settings draft before saving. `last_used_period` is the highest
/// period any slot currently ends at; fewer hours would cut slots off.
pub fn validate_settings_draft(settings: &Settings, last_used_period: u8) -> Result<(), String> {
    settings.validate().map_err(|e| e.to_string())?;
    if settings.number_of_hours < last_used_period {
        return Err(format!(
            "A slot ends at H{}; remove or shorten it before reducing the hours to {}",
            last_used_period, settings.number_of_hours
        ));
    }
    Ok(())
}

/// Render the settings dialog over a draft copy of the settings.
pub fn render_settings_dialog(
    ctx: &egui::Context,
    settings: &mut Settings,
    database: &Database,
    show_dialog: &mut bool,
    error_message: &mut Option<String>,
    last_used_period: u8,
) -> SettingsDialogResponse {
    let mut saved = false;
    let mut dialog_open = *show_dialog;

    egui::Window::new("Settings")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(error) = error_message.as_ref() {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(8.0);
            }

            let label_width = 160.0;

            ui.heading("Timetable");
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.allocate_ui_with_layout(
                    egui::Vec2::new(label_width, 20.0),
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        ui.label("Hours per day:");
                    },
                );
                ui.add(egui::Slider::new(&mut settings.number_of_hours, MIN_HOURS..=MAX_HOURS));
            });
            if settings.number_of_hours < last_used_period {
                ui.horizontal(|ui| {
                    ui.add_space(label_width);
                    ui.colored_label(
                        Color32::LIGHT_RED,
                        format!("⚠ Slots use periods up to H{}", last_used_period),
                    );
                });
            }

            ui.horizontal(|ui| {
                ui.add_space(label_width);
                ui.checkbox(&mut settings.editable, "Allow editing the timetable");
            });

            ui.add_space(12.0);
            ui.heading("Appearance");
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.allocate_ui_with_layout(
                    egui::Vec2::new(label_width, 20.0),
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        ui.label("Theme:");
                    },
                );
                ui.add_enabled_ui(!settings.use_system_theme, |ui| {
                    egui::ComboBox::from_id_source("theme_combo")
                        .selected_text(settings.theme.clone())
                        .show_ui(ui, |ui| {
                            for theme in THEMES {
                                ui.selectable_value(&mut settings.theme, theme.to_string(), theme);
                            }
                        });
                });
            });

            ui.horizontal(|ui| {
                ui.add_space(label_width);
                ui.checkbox(&mut settings.use_system_theme, "Follow system theme");
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("💾 Save").clicked() {
                    match validate_settings_draft(settings, last_used_period) {
                        Err(message) => *error_message = Some(message),
                        Ok(()) => match SettingsService::new(database).update(settings) {
                            Ok(()) => {
                                *error_message = None;
                                *show_dialog = false;
                                saved = true;
                            }
                            Err(e) => {
                                *error_message = Some(format!("Failed to save settings: {}", e));
                            }
                        },
                    }
                }

                if ui.button("✖ Cancel").clicked() {
                    *error_message = None;
                    *show_dialog = false;
                }

                ui.add_space(20.0);

                if ui
                    .button(RichText::new("↺ Reset to Defaults").color(Color32::LIGHT_BLUE))
                    .clicked()
                {
                    *settings = Settings::default();
                }
            });
        });

    if !dialog_open {
        *show_dialog = false;
    }

    SettingsDialogResponse { saved }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_with_enough_hours_is_valid() {
        let settings = Settings::default();
        assert!(validate_settings_draft(&settings, 7).is_ok());
        assert!(validate_settings_draft(&settings, 0).is_ok());
    }

    #[test]
    fn test_draft_cutting_slots_is_rejected() {
        let settings = Settings {
            number_of_hours: 5,
            ..Settings::default()
        };
        let message = validate_settings_draft(&settings, 6).unwrap_err();
        assert!(message.contains("H6"));
    }

    #[test]
    fn test_draft_out_of_range_is_rejected() {
        let settings = Settings {
            number_of_hours: 13,
            ..Settings::default()
        };
        assert!(validate_settings_draft(&settings, 0).is_err());
    }
}
