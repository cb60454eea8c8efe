use super::state::{StatusLevel, StatusMessage};
use super::TimetableApp;
use egui::{Color32, RichText};

impl TimetableApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        // A failed save outranks anything else worth saying.
        let save_error = self.state.save_error.borrow().clone();
        let message = save_error
            .map(StatusMessage::error)
            .or_else(|| self.state.status.clone());

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mode = if self.editor.is_editable() {
                    "Editing"
                } else {
                    "Read only"
                };
                ui.label(RichText::new(mode).strong());
                ui.separator();
                ui.label(format!(
                    "{} slots · {} hours",
                    self.editor.slots().len(),
                    self.editor.number_of_hours()
                ));

                if let Some(active) = self.editor.active_resize() {
                    let (start, end) = active.preview_periods();
                    ui.separator();
                    ui.label(format!("H{}–H{} (Esc to cancel)", start, end));
                }

                if let Some(message) = message {
                    ui.separator();
                    let color = match message.level {
                        StatusLevel::Info => ui.visuals().text_color(),
                        StatusLevel::Error => Color32::LIGHT_RED,
                    };
                    ui.label(RichText::new(message.text).color(color));
                    if ui.small_button("✖").clicked() {
                        self.state.status = None;
                        *self.state.save_error.borrow_mut() = None;
                    }
                }
            });
        });
    }
}
