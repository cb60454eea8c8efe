// Database service module
// SQLite database connection and schema management

mod connection;
mod migrations;
mod schema;

pub use connection::Database;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_new_database_in_memory() {
        let result = Database::new(":memory:");
        assert!(result.is_ok(), "Should create in-memory database");
    }

    #[test]
    fn test_new_database_with_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("timetable.db");
        let db_path_str = db_path.to_str().unwrap();

        let result = Database::new(db_path_str);
        assert!(result.is_ok(), "Should create file-based database");
        assert!(Path::new(db_path_str).exists(), "Database file should exist");
    }

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let db = Database::new(":memory:").unwrap();
        assert!(db.initialize_schema().is_ok());
        assert!(db.initialize_schema().is_ok(), "Second run should be a no-op");
    }

    #[test]
    fn test_tables_exist() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        for table in ["settings", "subjects", "timetable_slots"] {
            let count: i64 = db
                .connection()
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "{} table should exist", table);
        }
    }

    #[test]
    fn test_default_settings_inserted() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        let (theme, hours, editable): (String, i64, i64) = db
            .connection()
            .query_row(
                "SELECT theme, number_of_hours, editable FROM settings WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();

        assert_eq!(theme, "Light");
        assert_eq!(hours, 7);
        assert_eq!(editable, 0);
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::new(":memory:").unwrap();

        let enabled: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();

        assert_eq!(enabled, 1, "Foreign keys should be enabled");
    }

    #[test]
    fn test_slot_checks_reject_inverted_periods() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        let conn = db.connection();
        conn.execute("INSERT INTO subjects (id, name) VALUES ('s', 'Maths')", [])
            .unwrap();

        let result = conn.execute(
            "INSERT INTO timetable_slots
                (id, day_of_week, start_of_period, end_of_period, subject_id, subject_name)
             VALUES ('x', 1, 4, 2, 's', 'Maths')",
            [],
        );
        assert!(result.is_err());
    }
}
