use std::cell::RefCell;
use std::rc::Rc;

use crate::models::settings::Settings;
use crate::ui_egui::dialogs::subject_manager::SubjectManagerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One line of feedback shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// Written by the slot persister, read by the status bar.
pub type SaveErrorCell = Rc<RefCell<Option<String>>>;

pub struct AppState {
    pub subject_manager_state: SubjectManagerState,
    pub show_settings_dialog: bool,
    /// Copy of the settings the dialog edits until saved
    pub settings_draft: Settings,
    pub settings_error: Option<String>,
    pub status: Option<StatusMessage>,
    pub save_error: SaveErrorCell,
    pub pending_theme_apply: bool,
}

impl AppState {
    pub fn new(settings: &Settings, save_error: SaveErrorCell) -> Self {
        Self {
            subject_manager_state: SubjectManagerState::new(),
            show_settings_dialog: false,
            settings_draft: settings.clone(),
            settings_error: None,
            status: None,
            save_error,
            pending_theme_apply: false,
        }
    }

    pub fn open_settings(&mut self, settings: &Settings) {
        self.settings_draft = settings.clone();
        self.settings_error = None;
        self.show_settings_dialog = true;
    }
}
