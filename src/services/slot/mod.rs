//! Slot service: persistence for the timetable's slot collection.
//!
//! The editor reports the whole collection after every change, so the main
//! write path is [`SlotService::replace_all`], which swaps the stored rows in
//! a single transaction.

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, Row};

use crate::models::slot::Slot;
use crate::models::weekday::Weekday;

const SLOT_COLUMNS: &str =
    "id, day_of_week, start_of_period, end_of_period, subject_id, subject_name";

/// Service for reading and writing timetable slots.
pub struct SlotService<'a> {
    conn: &'a Connection,
}

impl<'a> SlotService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All slots ordered by day, then start period.
    pub fn list_all(&self) -> Result<Vec<Slot>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SLOT_COLUMNS} FROM timetable_slots
             ORDER BY day_of_week ASC, start_of_period ASC"
        ))?;

        let slots = stmt.query_map([], row_to_slot)?;
        slots
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to fetch timetable slots")
    }

    pub fn list_for_day(&self, day: Weekday) -> Result<Vec<Slot>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SLOT_COLUMNS} FROM timetable_slots
             WHERE day_of_week = ?1
             ORDER BY start_of_period ASC"
        ))?;

        let slots = stmt.query_map(params![day.index()], row_to_slot)?;
        slots
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to fetch slots for {}", day))
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Slot>> {
        let result = self.conn.query_row(
            &format!("SELECT {SLOT_COLUMNS} FROM timetable_slots WHERE id = ?1"),
            params![id],
            row_to_slot,
        );

        match result {
            Ok(slot) => Ok(Some(slot)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the stored collection with `slots`. Either every row is
    /// written or nothing changes.
    pub fn replace_all(&self, slots: &[Slot]) -> Result<()> {
        let tx = self
            .conn
            .unchecked_transaction()
            .context("Failed to start slot transaction")?;

        tx.execute("DELETE FROM timetable_slots", [])
            .context("Failed to clear timetable slots")?;
        {
            let mut insert = tx.prepare(&format!(
                "INSERT INTO timetable_slots ({SLOT_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
            ))?;
            for slot in slots {
                insert
                    .execute(params![
                        slot.id,
                        slot.day_of_week.index(),
                        slot.start_of_period,
                        slot.end_of_period,
                        slot.subject_id,
                        slot.subject_name,
                    ])
                    .with_context(|| {
                        format!(
                            "Failed to save slot '{}' on {}",
                            slot.subject_name, slot.day_of_week
                        )
                    })?;
            }
        }

        tx.commit().context("Failed to commit timetable slots")?;
        log::info!("Saved {} timetable slots", slots.len());
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM timetable_slots WHERE id = ?1", params![id])
            .context("Failed to delete slot")?;
        if deleted == 0 {
            return Err(anyhow!("Slot {} not found", id));
        }
        Ok(())
    }

    pub fn count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM timetable_slots", [], |row| row.get(0))
            .context("Failed to count slots")
    }
}

fn row_to_slot(row: &Row) -> Result<Slot, rusqlite::Error> {
    let day_index: u8 = row.get(1)?;
    let day_of_week = Weekday::from_index(day_index).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Integer,
            Box::new(crate::models::weekday::InvalidWeekday(day_index)),
        )
    })?;

    Ok(Slot {
        id: row.get(0)?,
        day_of_week,
        start_of_period: row.get(2)?,
        end_of_period: row.get(3)?,
        subject_id: row.get(4)?,
        subject_name: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::database::Database;
    use pretty_assertions::assert_eq;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db.connection()
            .execute(
                "INSERT INTO subjects (id, name) VALUES ('math', 'Maths'), ('phy', 'Physics')",
                [],
            )
            .unwrap();
        db
    }

    fn slot(id: &str, day: Weekday, start: u8, end: u8, subject: &str) -> Slot {
        Slot {
            id: id.to_string(),
            day_of_week: day,
            start_of_period: start,
            end_of_period: end,
            subject_id: subject.to_string(),
            subject_name: subject.to_uppercase(),
        }
    }

    #[test]
    fn test_replace_all_then_list() {
        let db = setup_test_db();
        let service = SlotService::new(db.connection());
        let slots = vec![
            slot("b", Weekday::Tuesday, 1, 2, "phy"),
            slot("a", Weekday::Monday, 3, 3, "math"),
        ];

        service.replace_all(&slots).unwrap();
        let loaded = service.list_all().unwrap();
        assert_eq!(loaded, vec![slots[1].clone(), slots[0].clone()]);

        service.replace_all(&slots[..1]).unwrap();
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_replace_all_is_atomic() {
        let db = setup_test_db();
        let service = SlotService::new(db.connection());
        service
            .replace_all(&[slot("keep", Weekday::Monday, 1, 1, "math")])
            .unwrap();

        // Second slot references a subject that does not exist.
        let result = service.replace_all(&[
            slot("a", Weekday::Monday, 2, 2, "math"),
            slot("b", Weekday::Monday, 3, 3, "nope"),
        ]);
        assert!(result.is_err());

        let ids: Vec<String> = service.list_all().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["keep".to_string()]);
    }

    #[test]
    fn test_list_for_day_and_get() {
        let db = setup_test_db();
        let service = SlotService::new(db.connection());
        service
            .replace_all(&[
                slot("a", Weekday::Friday, 4, 5, "math"),
                slot("b", Weekday::Friday, 1, 1, "phy"),
                slot("c", Weekday::Monday, 1, 1, "phy"),
            ])
            .unwrap();

        let friday: Vec<String> = service
            .list_for_day(Weekday::Friday)
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(friday, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(service.get_by_id("c").unwrap().unwrap().day_of_week, Weekday::Monday);
        assert!(service.get_by_id("zzz").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let db = setup_test_db();
        let service = SlotService::new(db.connection());
        service
            .replace_all(&[slot("a", Weekday::Monday, 1, 1, "math")])
            .unwrap();
        service.delete("a").unwrap();
        assert!(service.delete("a").is_err());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_deleting_subject_cascades_to_slots() {
        let db = setup_test_db();
        let service = SlotService::new(db.connection());
        service
            .replace_all(&[
                slot("a", Weekday::Monday, 1, 1, "math"),
                slot("b", Weekday::Monday, 2, 2, "phy"),
            ])
            .unwrap();

        db.connection()
            .execute("DELETE FROM subjects WHERE id = 'math'", [])
            .unwrap();
        let remaining: Vec<String> = service.list_all().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(remaining, vec!["b".to_string()]);
    }
}
