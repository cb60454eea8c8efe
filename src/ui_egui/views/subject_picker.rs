//! Default picker body: a searchable list of catalog subjects.

use egui::{Color32, RichText};

use super::{PickerOutcome, PickerRenderer};
use crate::models::slot::SlotInfo;
use crate::models::subject::Subject;
use crate::ui_egui::theme::TimetableTheme;

const LIST_HEIGHT: f32 = 220.0;

/// Subjects whose name contains `query`, ignoring case. An empty query
/// keeps everything.
pub fn filter_subjects<'a>(subjects: &'a [Subject], query: &str) -> Vec<&'a Subject> {
    subjects.iter().filter(|s| s.matches(query)).collect()
}

#[derive(Debug, Default, Clone)]
pub struct SubjectPicker {
    query: String,
    focused: bool,
}

impl SubjectPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl PickerRenderer for SubjectPicker {
    fn show_picker(&mut self, ui: &mut egui::Ui, slot_info: SlotInfo, subjects: &[Subject]) -> PickerOutcome {
        let mut outcome = PickerOutcome::Open;

        ui.set_min_width(200.0);
        ui.label(
            RichText::new(format!(
                "{} · H{}",
                slot_info.day_of_week.name(),
                slot_info.start_of_period
            ))
            .strong(),
        );
        ui.add_space(4.0);

        let search = ui.add(
            egui::TextEdit::singleline(&mut self.query)
                .hint_text("Search subjects")
                .desired_width(f32::INFINITY),
        );
        if !self.focused {
            search.request_focus();
            self.focused = true;
        }
        ui.add_space(4.0);

        let matches = filter_subjects(subjects, &self.query);
        egui::ScrollArea::vertical()
            .max_height(LIST_HEIGHT)
            .show(ui, |ui| {
                if matches.is_empty() {
                    ui.label(RichText::new("No subjects.").weak());
                }
                for subject in matches {
                    ui.horizontal(|ui| {
                        let color = subject
                            .color
                            .as_deref()
                            .and_then(|c| TimetableTheme::hex_to_color(c).ok())
                            .unwrap_or(Color32::GRAY);
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, color);

                        if ui.selectable_label(false, &subject.name).clicked() {
                            outcome = PickerOutcome::Selected {
                                subject_id: subject.id.clone(),
                                subject_name: subject.name.clone(),
                            };
                        }
                    });
                }
            });

        ui.separator();
        if ui.button("Cancel").clicked() {
            outcome = PickerOutcome::Dismissed;
        }

        outcome
    }

    fn reset(&mut self) {
        self.query.clear();
        self.focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Subject> {
        ["Mathematics", "Physics", "Physical Education", "Art"]
            .into_iter()
            .map(Subject::new)
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let subjects = catalog();
        let names: Vec<&str> = filter_subjects(&subjects, "PHYS")
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Physics", "Physical Education"]);
    }

    #[test]
    fn test_empty_query_keeps_all() {
        let subjects = catalog();
        assert_eq!(filter_subjects(&subjects, "  ").len(), 4);
    }

    #[test]
    fn test_no_match() {
        let subjects = catalog();
        assert!(filter_subjects(&subjects, "chemistry").is_empty());
    }

    #[test]
    fn test_reset_clears_query() {
        let mut picker = SubjectPicker::new();
        picker.query = "art".to_string();
        picker.reset();
        assert_eq!(picker.query(), "");
    }
}
