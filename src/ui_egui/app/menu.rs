use super::TimetableApp;
use egui::Context;

impl TimetableApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                self.render_file_menu(ui, ctx);
                self.render_edit_menu(ui);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut editable = self.editor.is_editable();
                    if ui.toggle_value(&mut editable, "✏ Edit mode").changed() {
                        self.set_editable(editable);
                    }
                });
            });
        });
    }

    fn render_file_menu(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        ui.menu_button("File", |ui| {
            let editable = self.editor.is_editable();
            ui.add_enabled_ui(editable, |ui| {
                if ui
                    .button("📥 Import Timetable...")
                    .on_disabled_hover_text("Turn on edit mode to import")
                    .clicked()
                {
                    self.import_timetable_json();
                    ui.close_menu();
                }
            });
            if ui.button("📤 Export Timetable...").clicked() {
                self.export_timetable_json();
                ui.close_menu();
            }

            ui.separator();
            if ui.button("Exit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn render_edit_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Edit", |ui| {
            if ui.button("📚 Manage Subjects...").clicked() {
                self.state.subject_manager_state.open();
                ui.close_menu();
            }

            ui.separator();

            if ui.button("⚙ Settings").clicked() {
                self.state.open_settings(&self.settings);
                ui.close_menu();
            }
        });
    }
}
