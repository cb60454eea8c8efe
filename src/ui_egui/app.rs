#[path = "app/context.rs"]
mod context;
mod imports;
mod lifecycle;
mod menu;
mod state;
mod status_bar;

use self::context::AppContext;
use self::state::{AppState, SaveErrorCell};
use crate::models::settings::Settings;
use crate::models::slot::Slot;
use crate::models::subject::Subject;
use crate::services::database::Database;
use crate::services::slot::SlotService;
use crate::services::timetable::{SlotChangeListener, TimetableEditor};
use crate::ui_egui::theme::TimetableTheme;
use crate::ui_egui::views::TimetableView;

pub use imports::{apply_snapshot, ImportSummary};
pub use lifecycle::initialize_database;

pub struct TimetableApp {
    /// Shared access to the leaked database
    context: AppContext,
    settings: Settings,
    /// Currently applied theme colors
    active_theme: TimetableTheme,
    editor: TimetableEditor,
    view: TimetableView,
    /// Picker and color source, reloaded when the catalog changes
    subjects: Vec<Subject>,
    /// Aggregated dialog/control state
    state: AppState,
}

impl eframe::App for TimetableApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

/// Writes the whole collection to SQLite every time the editor reports a
/// change. Failures are logged and surfaced in the status bar.
pub struct SlotPersister {
    database: &'static Database,
    save_error: SaveErrorCell,
}

impl SlotPersister {
    pub fn new(database: &'static Database, save_error: SaveErrorCell) -> Self {
        Self {
            database,
            save_error,
        }
    }
}

impl SlotChangeListener for SlotPersister {
    fn slots_changed(&mut self, slots: &[Slot]) {
        let result = SlotService::new(self.database.connection()).replace_all(slots);
        *self.save_error.borrow_mut() = match result {
            Ok(()) => None,
            Err(e) => {
                log::error!("Failed to save timetable: {:#}", e);
                Some(format!("Failed to save timetable: {}", e))
            }
        };
    }
}
