//! Subject service for CRUD operations on the subject catalog.
//!
//! Subjects are what the slot picker offers. Deleting a subject also removes
//! every slot that teaches it (foreign key cascade).

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, Row};

use crate::models::slot::Slot;
use crate::models::subject::Subject;

/// Service for managing the subject catalog.
pub struct SubjectService<'a> {
    conn: &'a Connection,
}

impl<'a> SubjectService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Create a new subject.
    pub fn create(&self, subject: &Subject) -> Result<Subject> {
        subject.validate().map_err(|e| anyhow!("{}", e))?;
        if self.name_exists(&subject.name, None)? {
            return Err(anyhow!("A subject named '{}' already exists", subject.name.trim()));
        }

        self.conn
            .execute(
                "INSERT INTO subjects (id, name, color) VALUES (?1, ?2, ?3)",
                params![subject.id, subject.name.trim(), subject.color],
            )
            .context("Failed to insert subject")?;

        log::info!("Created subject '{}'", subject.name.trim());
        self.get_by_id(&subject.id)
    }

    /// Get a subject by ID.
    pub fn get_by_id(&self, id: &str) -> Result<Subject> {
        self.conn
            .query_row(
                "SELECT id, name, color FROM subjects WHERE id = ?1",
                params![id],
                row_to_subject,
            )
            .context("Subject not found")
    }

    /// Get a subject by name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Result<Option<Subject>> {
        let result = self.conn.query_row(
            "SELECT id, name, color FROM subjects WHERE name = ?1 COLLATE NOCASE",
            params![name.trim()],
            row_to_subject,
        );

        match result {
            Ok(subject) => Ok(Some(subject)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all subjects ordered by name.
    pub fn list_all(&self) -> Result<Vec<Subject>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color FROM subjects ORDER BY name COLLATE NOCASE ASC")?;

        let subjects = stmt.query_map([], row_to_subject)?;
        subjects
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to fetch subjects")
    }

    /// Update a subject's name and color. Slots keep the name they were
    /// created with until renamed here, so the new name is copied to them.
    pub fn update(&self, subject: &Subject) -> Result<()> {
        subject.validate().map_err(|e| anyhow!("{}", e))?;
        if self.name_exists(&subject.name, Some(&subject.id))? {
            return Err(anyhow!("A subject named '{}' already exists", subject.name.trim()));
        }

        let updated = self
            .conn
            .execute(
                "UPDATE subjects SET name = ?1, color = ?2 WHERE id = ?3",
                params![subject.name.trim(), subject.color, subject.id],
            )
            .context("Failed to update subject")?;
        if updated == 0 {
            return Err(anyhow!("Subject {} not found", subject.id));
        }

        self.conn
            .execute(
                "UPDATE timetable_slots SET subject_name = ?1 WHERE subject_id = ?2",
                params![subject.name.trim(), subject.id],
            )
            .context("Failed to rename subject on slots")?;
        Ok(())
    }

    /// Delete a subject and, through the cascade, its slots.
    pub fn delete(&self, id: &str) -> Result<()> {
        let usage = self.get_usage_count(id)?;
        let deleted = self
            .conn
            .execute("DELETE FROM subjects WHERE id = ?1", params![id])
            .context("Failed to delete subject")?;
        if deleted == 0 {
            return Err(anyhow!("Subject {} not found", id));
        }
        if usage > 0 {
            log::info!("Deleted subject {} and {} of its slots", id, usage);
        }
        Ok(())
    }

    /// Check if a subject name already exists (excluding a specific ID).
    pub fn name_exists(&self, name: &str, exclude_id: Option<&str>) -> Result<bool> {
        let count: i32 = self.conn.query_row(
            "SELECT COUNT(*) FROM subjects WHERE name = ?1 COLLATE NOCASE AND id IS NOT ?2",
            params![name.trim(), exclude_id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    /// Number of slots that teach this subject.
    pub fn get_usage_count(&self, id: &str) -> Result<i32> {
        let count: i32 = self.conn.query_row(
            "SELECT COUNT(*) FROM timetable_slots WHERE subject_id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Point imported slots at catalog subjects: match by id, then by name,
    /// creating a subject when neither exists.
    pub fn ensure_for_slots(&self, slots: &mut [Slot]) -> Result<()> {
        for slot in slots.iter_mut() {
            if self.get_by_id(&slot.subject_id).is_ok() {
                continue;
            }
            let subject = match self.get_by_name(&slot.subject_name)? {
                Some(existing) => existing,
                None => {
                    let mut created = Subject::new(slot.subject_name.trim());
                    if !slot.subject_id.trim().is_empty() {
                        created.id = slot.subject_id.clone();
                    }
                    self.create(&created)?
                }
            };
            slot.subject_id = subject.id;
            slot.subject_name = subject.name;
        }
        Ok(())
    }
}

fn row_to_subject(row: &Row) -> Result<Subject, rusqlite::Error> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
    })
}
