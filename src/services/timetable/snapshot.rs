use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::models::settings::DEFAULT_HOURS;
use crate::models::slot::Slot;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Portable JSON form of a timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_hours")]
    pub number_of_hours: u8,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

fn default_hours() -> u8 {
    DEFAULT_HOURS
}

impl TimetableSnapshot {
    pub fn new(number_of_hours: u8, slots: Vec<Slot>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            number_of_hours,
            slots,
        }
    }
}

pub fn load_snapshot(path: &Path) -> Result<TimetableSnapshot> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read timetable from {}", path.display()))?;
    let snapshot: TimetableSnapshot =
        serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    if snapshot.version > SNAPSHOT_VERSION {
        anyhow::bail!(
            "timetable in {} has version {}, newest supported is {}",
            path.display(),
            snapshot.version,
            SNAPSHOT_VERSION
        );
    }
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &TimetableSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
    }

    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write timetable to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize timetable from {}",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weekday::Weekday;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("timetable.json");
        let snapshot = TimetableSnapshot::new(
            8,
            vec![Slot::new(Weekday::Tuesday, 2, 3, "sub-1", "Algebra")],
        );

        save_snapshot(&path, &snapshot).unwrap();
        assert_eq!(load_snapshot(&path).unwrap(), snapshot);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timetable.json");
        fs::write(&path, "{}").unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.number_of_hours, DEFAULT_HOURS);
        assert!(snapshot.slots.is_empty());
    }

    #[test]
    fn test_newer_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timetable.json");
        fs::write(&path, r#"{"version": 99}"#).unwrap();
        assert!(load_snapshot(&path).is_err());
    }

    #[test]
    fn test_bad_json_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();
        let err = load_snapshot(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }
}
