//! Subject management dialog for creating, editing, and deleting the
//! subjects the picker offers.

use crate::models::subject::{is_valid_hex_color, Subject};
use crate::services::database::Database;
use crate::services::subject::SubjectService;
use crate::ui_egui::theme::TimetableTheme;
use egui::{Color32, RichText};

const DEFAULT_COLOR: &str = "#3B82F6";
const COLOR_PRESETS: [&str; 6] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899"];

/// A delete waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub name: String,
    /// Slots that will be removed with the subject
    pub usage: i32,
}

/// State for the subject management dialog.
#[derive(Debug, Clone, Default)]
pub struct SubjectManagerState {
    pub open: bool,
    /// Subject being edited (None = creating new)
    pub editing_subject: Option<Subject>,
    pub name_input: String,
    pub color_input: String,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub delete_pending: Option<PendingDelete>,
}

impl SubjectManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
        self.start_new();
        self.delete_pending = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.editing_subject = None;
        self.delete_pending = None;
    }

    pub fn start_edit(&mut self, subject: Subject) {
        self.name_input = subject.name.clone();
        self.color_input = subject.color.clone().unwrap_or_default();
        self.editing_subject = Some(subject);
        self.clear_messages();
    }

    pub fn start_new(&mut self) {
        self.editing_subject = None;
        self.name_input.clear();
        self.color_input = DEFAULT_COLOR.to_string();
        self.clear_messages();
    }

    fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Validate the inputs into a subject ready to save. A blank color
    /// means "no color".
    pub fn build_subject(&self) -> Result<Subject, String> {
        let name = self.name_input.trim();
        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        let color = self.color_input.trim();
        let color = if color.is_empty() {
            None
        } else if is_valid_hex_color(color) {
            Some(color.to_string())
        } else {
            return Err("Invalid color format".to_string());
        };

        let mut subject = match &self.editing_subject {
            Some(existing) => existing.clone(),
            None => Subject::new(name),
        };
        subject.name = name.to_string();
        subject.color = color;
        Ok(subject)
    }
}

/// Response from the subject manager dialog.
#[derive(Debug, Default)]
pub struct SubjectManagerResponse {
    /// Subjects were created, renamed, recolored or deleted
    pub subjects_changed: bool,
}

/// Render the subject management dialog.
pub fn render_subject_manager_dialog(
    ctx: &egui::Context,
    state: &mut SubjectManagerState,
    database: &Database,
) -> SubjectManagerResponse {
    let mut response = SubjectManagerResponse::default();

    if !state.open {
        return response;
    }

    let mut dialog_open = state.open;
    let service = SubjectService::new(database.connection());
    let subjects = service.list_all().unwrap_or_else(|e| {
        log::error!("Failed to load subjects: {}", e);
        Vec::new()
    });

    egui::Window::new("Manage Subjects")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(true)
        .default_width(480.0)
        .min_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref error) = state.error_message {
                ui.colored_label(Color32::RED, format!("❌ {}", error));
                ui.add_space(4.0);
            }
            if let Some(ref success) = state.success_message {
                ui.colored_label(Color32::GREEN, format!("✓ {}", success));
                ui.add_space(4.0);
            }

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.set_min_width(180.0);
                    ui.heading("Subjects");
                    ui.add_space(4.0);

                    egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                        if subjects.is_empty() {
                            ui.label(RichText::new("No subjects.").weak());
                        }
                        for subject in &subjects {
                            let is_selected = state
                                .editing_subject
                                .as_ref()
                                .is_some_and(|e| e.id == subject.id);

                            ui.horizontal(|ui| {
                                let color = subject
                                    .color
                                    .as_deref()
                                    .and_then(|c| TimetableTheme::hex_to_color(c).ok())
                                    .unwrap_or(Color32::GRAY);
                                let (rect, _) = ui.allocate_exact_size(
                                    egui::vec2(16.0, 16.0),
                                    egui::Sense::hover(),
                                );
                                ui.painter().rect_filled(rect, 3.0, color);

                                let text = if is_selected {
                                    RichText::new(&subject.name).strong()
                                } else {
                                    RichText::new(&subject.name)
                                };
                                if ui.selectable_label(is_selected, text).clicked() {
                                    state.start_edit(subject.clone());
                                }
                            });
                        }
                    });

                    ui.add_space(8.0);
                    if ui.button("➕ New Subject").clicked() {
                        state.start_new();
                    }
                });

                ui.separator();

                ui.vertical(|ui| {
                    ui.set_min_width(200.0);
                    let is_editing = state.editing_subject.is_some();
                    ui.heading(if is_editing { "Edit Subject" } else { "New Subject" });
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.label("Name:");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.name_input)
                                .desired_width(150.0)
                                .hint_text("Subject name"),
                        );
                    });
                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Color:");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.color_input)
                                .desired_width(80.0)
                                .hint_text("#RRGGBB"),
                        );
                        if let Ok(preview) = TimetableTheme::hex_to_color(&state.color_input) {
                            let (rect, _) = ui
                                .allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
                            ui.painter().rect_filled(rect, 4.0, preview);
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Presets:");
                        for hex in COLOR_PRESETS {
                            let color = TimetableTheme::hex_to_color(hex).unwrap_or(Color32::GRAY);
                            let button = egui::Button::new("").fill(color).min_size(egui::vec2(20.0, 20.0));
                            if ui.add(button).clicked() {
                                state.color_input = hex.to_string();
                            }
                        }
                    });

                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        if ui.button(if is_editing { "💾 Save" } else { "➕ Create" }).clicked() {
                            state.clear_messages();
                            match state.build_subject() {
                                Err(message) => state.error_message = Some(message),
                                Ok(subject) if is_editing => match service.update(&subject) {
                                    Ok(()) => {
                                        state.success_message = Some("Subject updated".to_string());
                                        response.subjects_changed = true;
                                        state.editing_subject = Some(subject);
                                    }
                                    Err(e) => {
                                        state.error_message = Some(format!("Failed to update: {}", e));
                                    }
                                },
                                Ok(subject) => match service.create(&subject) {
                                    Ok(created) => {
                                        let message = format!("Created '{}'", created.name);
                                        response.subjects_changed = true;
                                        state.start_edit(created);
                                        state.success_message = Some(message);
                                    }
                                    Err(e) => {
                                        state.error_message = Some(format!("Failed to create: {}", e));
                                    }
                                },
                            }
                        }

                        if let Some(subject) = state.editing_subject.clone() {
                            if ui.button(RichText::new("🗑 Delete").color(Color32::LIGHT_RED)).clicked() {
                                let usage = service.get_usage_count(&subject.id).unwrap_or(0);
                                state.delete_pending = Some(PendingDelete {
                                    id: subject.id,
                                    name: subject.name,
                                    usage,
                                });
                            }
                            if ui.button("Cancel").clicked() {
                                state.start_new();
                            }
                        }
                    });

                    if let Some(pending) = state.delete_pending.clone() {
                        ui.add_space(8.0);
                        ui.separator();
                        ui.colored_label(Color32::YELLOW, format!("⚠ Delete '{}'?", pending.name));
                        if pending.usage > 0 {
                            ui.label(format!(
                                "{} slot(s) teach this subject and will be removed.",
                                pending.usage
                            ));
                        }

                        ui.horizontal(|ui| {
                            if ui.button(RichText::new("Yes, Delete").color(Color32::RED)).clicked() {
                                match service.delete(&pending.id) {
                                    Ok(()) => {
                                        response.subjects_changed = true;
                                        state.start_new();
                                        state.success_message = Some(format!("Deleted '{}'", pending.name));
                                    }
                                    Err(e) => {
                                        state.error_message = Some(format!("Failed to delete: {}", e));
                                    }
                                }
                                state.delete_pending = None;
                            }
                            if ui.button("No, Keep").clicked() {
                                state.delete_pending = None;
                            }
                        });
                    }
                });
            });
        });

    if !dialog_open {
        state.close();
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_resets_inputs() {
        let mut state = SubjectManagerState::new();
        state.name_input = "stale".to_string();
        state.error_message = Some("old".to_string());
        state.open();
        assert!(state.open);
        assert!(state.name_input.is_empty());
        assert_eq!(state.color_input, DEFAULT_COLOR);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_build_subject_validates_inputs() {
        let mut state = SubjectManagerState::new();
        state.start_new();
        assert!(state.build_subject().is_err());

        state.name_input = "  Biology ".to_string();
        state.color_input = "green".to_string();
        assert_eq!(state.build_subject().unwrap_err(), "Invalid color format");

        state.color_input = String::new();
        let subject = state.build_subject().unwrap();
        assert_eq!(subject.name, "Biology");
        assert_eq!(subject.color, None);
    }

    #[test]
    fn test_build_subject_keeps_id_when_editing() {
        let mut state = SubjectManagerState::new();
        let existing = Subject::with_color("Art", "#FF0000");
        state.start_edit(existing.clone());
        state.name_input = "Fine Art".to_string();

        let subject = state.build_subject().unwrap();
        assert_eq!(subject.id, existing.id);
        assert_eq!(subject.name, "Fine Art");
        assert_eq!(subject.color.as_deref(), Some("#FF0000"));
    }
}
