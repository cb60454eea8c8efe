use crate::models::settings::Settings;
use crate::services::database::Database;
use anyhow::{anyhow, Context, Result};

use super::mapper::row_to_settings;

pub struct SettingsService<'a> {
    db: &'a Database,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get the current settings
    pub fn get(&self) -> Result<Settings> {
        let conn = self.db.connection();

        let settings = conn
            .query_row(
                "SELECT id, theme, number_of_hours, editable, use_system_theme
                 FROM settings WHERE id = 1",
                [],
                row_to_settings,
            )
            .context("Failed to load settings")?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        let conn = self.db.connection();

        conn.execute(
            "UPDATE settings \
             SET theme = ?1, \
                 number_of_hours = ?2, \
                 editable = ?3, \
                 use_system_theme = ?4, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = 1",
            (
                &settings.theme,
                settings.number_of_hours,
                settings.editable as i32,
                settings.use_system_theme as i32,
            ),
        )
        .context("Failed to update settings")?;

        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        let default_settings = Settings::default();
        self.update(&default_settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::database::Database;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_get_default_settings() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);

        let settings = service.get().unwrap();
        assert_eq!(settings.theme, "Light");
        assert_eq!(settings.number_of_hours, 7);
        assert!(!settings.editable);
        assert!(!settings.use_system_theme);
    }

    #[test]
    fn test_update_settings() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);

        let mut settings = service.get().unwrap();
        settings.theme = "Dark".to_string();
        settings.number_of_hours = 9;
        settings.editable = true;

        let result = service.update(&settings);
        assert!(result.is_ok());

        let updated = service.get().unwrap();
        assert_eq!(updated.theme, "Dark");
        assert_eq!(updated.number_of_hours, 9);
        assert!(updated.editable);
    }

    #[test]
    fn test_update_invalid_settings() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);

        let mut settings = service.get().unwrap();
        settings.number_of_hours = 20;

        let result = service.update(&settings);
        assert!(result.is_err());
        assert_eq!(service.get().unwrap().number_of_hours, 7);
    }

    #[test]
    fn test_reset_settings() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);

        let mut settings = service.get().unwrap();
        settings.theme = "Dark".to_string();
        settings.use_system_theme = true;
        service.update(&settings).unwrap();

        let result = service.reset();
        assert!(result.is_ok());

        let reset_settings = service.get().unwrap();
        let defaults = Settings::default();
        assert_eq!(reset_settings.theme, defaults.theme);
        assert_eq!(reset_settings.use_system_theme, defaults.use_system_theme);
    }
}
