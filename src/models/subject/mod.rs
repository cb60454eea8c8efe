//! Subject model: the catalog entries a timetable slot can be assigned.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A subject taught in the branch, offered by the slot picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    /// Display name (must be unique, case-insensitive)
    pub name: String,
    /// Optional hex color used to tint the subject's slots (e.g. "#3B82F6")
    pub color: Option<String>,
}

impl Subject {
    /// Create a new subject with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::new(name)
        }
    }

    /// Validate the subject data.
    pub fn validate(&self) -> Result<(), SubjectValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SubjectValidationError::EmptyName);
        }
        if name.chars().count() > 80 {
            return Err(SubjectValidationError::NameTooLong);
        }
        if let Some(ref color) = self.color {
            if !is_valid_hex_color(color) {
                return Err(SubjectValidationError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }

    /// Case-insensitive substring match used by the picker search box.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Validation errors for Subject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectValidationError {
    #[error("Subject name cannot be empty")]
    EmptyName,
    #[error("Subject name must be 80 characters or less")]
    NameTooLong,
    #[error("Invalid color format '{0}' (use hex like #FF0000)")]
    InvalidColor(String),
}

/// Check if a string is a valid hex color code.
pub fn is_valid_hex_color(color: &str) -> bool {
    let Some(hex) = color.trim().strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(Subject::new("Chemistry").validate().is_ok());
        assert_eq!(Subject::new("   ").validate(), Err(SubjectValidationError::EmptyName));
        assert_eq!(
            Subject::new("x".repeat(81)).validate(),
            Err(SubjectValidationError::NameTooLong)
        );
    }

    #[test]
    fn test_validate_color() {
        assert!(Subject::with_color("Art", "#f0a").validate().is_ok());
        assert!(Subject::with_color("Art", "#10B981").validate().is_ok());
        assert_eq!(
            Subject::with_color("Art", "10B981").validate(),
            Err(SubjectValidationError::InvalidColor("10B981".to_string()))
        );
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let subject = Subject::new("Engineering Mathematics");
        assert!(subject.matches("math"));
        assert!(subject.matches("ENGINEERING"));
        assert!(subject.matches(""));
        assert!(!subject.matches("physics"));
    }
}
