//! Startup configuration read from `config.toml`.
//!
//! Lives in the platform config directory (for example
//! `~/.config/instello-timetable/config.toml` on Linux). Every key is
//! optional and a missing file means defaults.
//!
//! ```toml
//! database_path = "/srv/instello/timetable.db"
//! log_filter = "instello_timetable=debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "timetable.db";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// SQLite file to open; defaults to the platform data directory
    pub database_path: Option<PathBuf>,
    /// `env_logger` filter used when `RUST_LOG` is not set
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        toml::from_str(&data)
            .with_context(|| format!("failed to parse config in {}", path.display()))
    }

    /// Load from the platform config directory, falling back to defaults
    /// when the directory cannot be resolved.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        let data = toml::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Database file to open: the configured path, the platform data
    /// directory, or `timetable.db` in the working directory.
    pub fn resolve_database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(DATABASE_FILE))
            .unwrap_or_else(|| PathBuf::from(DATABASE_FILE))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Instello", "instello-timetable")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_load_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "database_path = \"/tmp/tt.db\"\nlog_filter = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.resolve_database_path(), PathBuf::from("/tmp/tt.db"));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "databse_path = \"typo.db\"\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            database_path: Some(PathBuf::from("school.db")),
            log_filter: None,
        };
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }
}
