use super::context::AppContext;
use super::state::{AppState, StatusMessage};
use super::{SlotPersister, TimetableApp};
use crate::models::settings::Settings;
use crate::models::slot::Slot;
use crate::services::database::Database;
use crate::services::settings::SettingsService;
use crate::services::timetable::{TimetableConfig, TimetableEditor};
use crate::ui_egui::settings_dialog::render_settings_dialog;
use crate::ui_egui::dialogs::subject_manager::render_subject_manager_dialog;
use crate::ui_egui::theme::TimetableTheme;
use crate::ui_egui::views::TimetableView;
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

impl TimetableApp {
    pub fn new(cc: &eframe::CreationContext<'_>, database: &'static Database) -> Self {
        let context = AppContext::new(database);

        let settings = load_settings_or_default(&context.settings_service());
        log::info!(
            "Loaded settings: number_of_hours={}, editable={}, theme={}",
            settings.number_of_hours,
            settings.editable,
            settings.theme
        );

        let stored_slots = load_or_log(context.slot_service().list_all(), "timetable slots");
        let subjects = load_or_log(context.subject_service().list_all(), "subjects");

        let stored_count = stored_slots.len();
        let mut editor = TimetableEditor::new(
            TimetableConfig {
                number_of_hours: settings.number_of_hours,
                editable: settings.editable,
            },
            stored_slots,
        );
        if editor.slots().len() != stored_count {
            log::warn!(
                "Dropped {} stored slots that no longer fit the grid",
                stored_count - editor.slots().len()
            );
            if let Err(e) = context.slot_service().replace_all(editor.slots()) {
                log::error!("Failed to save cleaned timetable: {:#}", e);
            }
        }

        let save_error = Rc::new(RefCell::new(None));
        editor.set_listener(Box::new(SlotPersister::new(database, Rc::clone(&save_error))));

        let mut app = Self {
            state: AppState::new(&settings, save_error),
            context,
            active_theme: TimetableTheme::for_settings(&settings),
            settings,
            editor,
            view: TimetableView::new("weekly_timetable"),
            subjects,
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        self.active_theme = TimetableTheme::for_settings(&self.settings);
        self.active_theme.apply_to_context(ctx);
    }

    pub(super) fn reload_subjects(&mut self) {
        self.subjects = load_or_log(self.context.subject_service().list_all(), "subjects");
    }

    /// Pull the slot collection back from the database without notifying
    /// the persister, after the catalog changed underneath it.
    pub(super) fn reload_slots(&mut self) {
        let slots: Vec<Slot> = load_or_log(self.context.slot_service().list_all(), "timetable slots");
        self.editor.replace_slots(slots);
    }

    pub(super) fn set_editable(&mut self, editable: bool) {
        self.settings.editable = editable;
        self.editor.set_editable(editable);
        if let Err(e) = self.context.settings_service().update(&self.settings) {
            log::error!("Failed to save edit mode: {:#}", e);
            self.state.status = Some(StatusMessage::error("Could not save edit mode"));
        }
    }

    /// Adopt settings the dialog has already validated and saved.
    fn apply_saved_settings(&mut self, saved: Settings) {
        if saved.number_of_hours != self.editor.number_of_hours()
            && !self.editor.set_number_of_hours(saved.number_of_hours)
        {
            self.state.status = Some(StatusMessage::error(format!(
                "Could not change the grid to {} hours",
                saved.number_of_hours
            )));
            return;
        }
        self.editor.set_editable(saved.editable);
        self.settings = saved;
        self.state.pending_theme_apply = true;
        self.state.status = Some(StatusMessage::info("Settings saved"));
    }

    /// Highest period any slot ends at, or 0 for an empty grid.
    pub(super) fn last_used_period(&self) -> u8 {
        self.editor
            .slots()
            .iter()
            .map(|s| s.end_of_period)
            .max()
            .unwrap_or(0)
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.pending_theme_apply {
            self.apply_theme(ctx);
            self.state.pending_theme_apply = false;
        }

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.view
                    .show(ui, &mut self.editor, &self.subjects, &self.active_theme);
            });
        });

        self.handle_dialogs(ctx);
    }

    fn handle_dialogs(&mut self, ctx: &egui::Context) {
        let response = render_subject_manager_dialog(
            ctx,
            &mut self.state.subject_manager_state,
            self.context.database(),
        );
        if response.subjects_changed {
            self.reload_subjects();
            // Renames and cascading deletes change stored slots.
            self.reload_slots();
        }

        if self.state.show_settings_dialog {
            let last_used_period = self.last_used_period();
            let response = render_settings_dialog(
                ctx,
                &mut self.state.settings_draft,
                self.context.database(),
                &mut self.state.show_settings_dialog,
                &mut self.state.settings_error,
                last_used_period,
            );
            if response.saved {
                let saved = self.state.settings_draft.clone();
                self.apply_saved_settings(saved);
            }
        }
    }
}

/// Open (creating if needed) the database at `path` and leak it for the
/// `'static` lifetime eframe's app requires.
pub fn initialize_database(path: &Path) -> Result<&'static Database> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    let db = Database::new(&path.to_string_lossy())
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    db.initialize_schema()
        .context("Failed to initialize database schema")?;
    log::info!("Using database {}", path.display());

    Ok(Box::leak(Box::new(db)))
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {}, using defaults", e);
            Settings::default()
        }
    }
}

fn load_or_log<T>(result: Result<Vec<T>>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("Failed to load {}: {:#}", what, e);
        Vec::new()
    })
}
