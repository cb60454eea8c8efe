use crate::services::database::Database;
use crate::services::settings::SettingsService;
use crate::services::slot::SlotService;
use crate::services::subject::SubjectService;

/// Shared access point for services that multiple app modules need.
pub struct AppContext {
    database: &'static Database,
}

impl AppContext {
    pub fn new(database: &'static Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &'static Database {
        self.database
    }

    pub fn settings_service(&self) -> SettingsService<'_> {
        SettingsService::new(self.database)
    }

    pub fn slot_service(&self) -> SlotService<'_> {
        SlotService::new(self.database.connection())
    }

    pub fn subject_service(&self) -> SubjectService<'_> {
        SubjectService::new(self.database.connection())
    }
}
