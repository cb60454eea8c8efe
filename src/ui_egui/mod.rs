mod app;
pub mod dialogs;
pub mod resize;
mod settings_dialog;
pub mod theme;
pub mod views;

pub use app::{apply_snapshot, initialize_database, ImportSummary, SlotPersister, TimetableApp};
