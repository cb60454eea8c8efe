//! JSON import/export of the timetable through file dialogs.

use std::path::Path;

use anyhow::{Context, Result};

use super::state::StatusMessage;
use super::TimetableApp;
use crate::models::settings::{Settings, MAX_HOURS, MIN_HOURS};
use crate::services::database::Database;
use crate::services::settings::SettingsService;
use crate::services::slot::SlotService;
use crate::services::subject::SubjectService;
use crate::services::timetable::{
    load_snapshot, save_snapshot, TimetableEditor, TimetableSnapshot,
};

/// What an import did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Slots that were out of bounds or overlapped another slot
    pub dropped: usize,
    pub number_of_hours: u8,
}

/// Replace the timetable with a snapshot: adopt its hours, make sure every
/// subject it references exists, then store whatever slots fit the grid.
/// The editor is updated silently and the result written in one go.
pub fn apply_snapshot(
    database: &Database,
    editor: &mut TimetableEditor,
    settings: &mut Settings,
    snapshot: TimetableSnapshot,
) -> Result<ImportSummary> {
    let number_of_hours = snapshot.number_of_hours.clamp(MIN_HOURS, MAX_HOURS);
    let mut slots = snapshot.slots;
    let incoming = slots.len();

    SubjectService::new(database.connection())
        .ensure_for_slots(&mut slots)
        .context("Failed to add subjects for imported slots")?;

    editor.replace_slots(Vec::new());
    if !editor.set_number_of_hours(number_of_hours) {
        anyhow::bail!("Unsupported number of hours {}", number_of_hours);
    }
    editor.replace_slots(slots);

    SlotService::new(database.connection())
        .replace_all(editor.slots())
        .context("Failed to save imported slots")?;

    settings.number_of_hours = number_of_hours;
    SettingsService::new(database)
        .update(settings)
        .context("Failed to save imported number of hours")?;

    let summary = ImportSummary {
        imported: editor.slots().len(),
        dropped: incoming - editor.slots().len(),
        number_of_hours,
    };
    log::info!(
        "Imported {} slots ({} dropped) with {} hours",
        summary.imported,
        summary.dropped,
        summary.number_of_hours
    );
    Ok(summary)
}

impl TimetableApp {
    pub(super) fn export_timetable_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Timetable JSON", &["json"])
            .set_file_name("timetable.json")
            .save_file()
        else {
            return;
        };

        self.state.status = Some(match self.export_to(&path) {
            Ok(()) => StatusMessage::info(format!(
                "Exported {} slots to {}",
                self.editor.slots().len(),
                path.display()
            )),
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                StatusMessage::error(format!("Export failed: {}", e))
            }
        });
    }

    fn export_to(&self, path: &Path) -> Result<()> {
        let snapshot =
            TimetableSnapshot::new(self.editor.number_of_hours(), self.editor.slots().to_vec());
        save_snapshot(path, &snapshot)
    }

    pub(super) fn import_timetable_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Timetable JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        let result = load_snapshot(&path).and_then(|snapshot| {
            apply_snapshot(
                self.context.database(),
                &mut self.editor,
                &mut self.settings,
                snapshot,
            )
        });

        self.state.status = Some(match result {
            Ok(summary) if summary.dropped > 0 => StatusMessage::info(format!(
                "Imported {} slots, skipped {} that did not fit",
                summary.imported, summary.dropped
            )),
            Ok(summary) => StatusMessage::info(format!("Imported {} slots", summary.imported)),
            Err(e) => {
                log::error!("Import failed: {:#}", e);
                StatusMessage::error(format!("Import failed: {}", e))
            }
        });
        self.reload_subjects();
    }
}
