use anyhow::{Context, Result};
use rusqlite::Connection;

use super::migrations;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_settings_table(conn)?;
    run_settings_migrations(conn)?;
    insert_default_settings(conn)?;
    create_subjects_table(conn)?;
    run_subject_migrations(conn)?;
    create_slots_table(conn)?;
    Ok(())
}

fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            theme TEXT NOT NULL DEFAULT 'Light',
            number_of_hours INTEGER NOT NULL DEFAULT 7
                CHECK (number_of_hours BETWEEN 1 AND 12),
            editable INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create settings table")?;

    Ok(())
}

fn run_settings_migrations(conn: &Connection) -> Result<()> {
    migrations::ensure_column(
        conn,
        "settings",
        "use_system_theme",
        "ALTER TABLE settings ADD COLUMN use_system_theme INTEGER NOT NULL DEFAULT 0",
    )
}

fn insert_default_settings(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO settings (id, theme, number_of_hours, editable)
         VALUES (1, 'Light', 7, 0)",
        [],
    )
    .context("Failed to insert default settings")?;

    Ok(())
}

fn create_subjects_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS subjects (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create subjects table")?;

    Ok(())
}

fn run_subject_migrations(conn: &Connection) -> Result<()> {
    migrations::ensure_column(
        conn,
        "subjects",
        "color",
        "ALTER TABLE subjects ADD COLUMN color TEXT",
    )
}

fn create_slots_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS timetable_slots (
            id TEXT PRIMARY KEY,
            day_of_week INTEGER NOT NULL CHECK (day_of_week BETWEEN 1 AND 6),
            start_of_period INTEGER NOT NULL CHECK (start_of_period >= 1),
            end_of_period INTEGER NOT NULL,
            subject_id TEXT NOT NULL,
            subject_name TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (start_of_period <= end_of_period),
            FOREIGN KEY (subject_id) REFERENCES subjects(id) ON DELETE CASCADE
        )",
        [],
    )
    .context("Failed to create timetable_slots table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_timetable_slots_day
         ON timetable_slots(day_of_week, start_of_period)",
        [],
    )
    .context("Failed to create timetable_slots index")?;

    Ok(())
}
