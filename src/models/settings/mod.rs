// Settings model
// Persisted in the single-row `settings` table

use thiserror::Error;

/// Smallest and largest number of periods a day may have.
pub const MIN_HOURS: u8 = 1;
pub const MAX_HOURS: u8 = 12;
pub const DEFAULT_HOURS: u8 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub id: Option<i64>,
    /// Theme name ("Light" or "Dark")
    pub theme: String,
    /// Follow the operating system's light/dark preference
    pub use_system_theme: bool,
    /// Number of periods (hour-columns) per day
    pub number_of_hours: u8,
    /// Whether the grid accepts create/resize/delete
    pub editable: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: Some(1),
            theme: "Light".to_string(),
            use_system_theme: false,
            number_of_hours: DEFAULT_HOURS,
            editable: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.theme.trim().is_empty() {
            return Err(SettingsValidationError::EmptyTheme);
        }
        if !(MIN_HOURS..=MAX_HOURS).contains(&self.number_of_hours) {
            return Err(SettingsValidationError::HoursOutOfRange(self.number_of_hours));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("Theme name cannot be empty")]
    EmptyTheme,
    #[error("Number of hours must be between {MIN_HOURS} and {MAX_HOURS}, got {0}")]
    HoursOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.number_of_hours, 7);
        assert!(!settings.editable);
    }

    #[test]
    fn test_hours_out_of_range() {
        let mut settings = Settings::default();
        settings.number_of_hours = 0;
        assert_eq!(settings.validate(), Err(SettingsValidationError::HoursOutOfRange(0)));
        settings.number_of_hours = 13;
        assert_eq!(settings.validate(), Err(SettingsValidationError::HoursOutOfRange(13)));
    }

    #[test]
    fn test_empty_theme_rejected() {
        let settings = Settings {
            theme: " ".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsValidationError::EmptyTheme));
    }
}
