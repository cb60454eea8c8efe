use crate::models::settings::Settings;
use rusqlite::Row;

pub fn row_to_settings(row: &Row) -> Result<Settings, rusqlite::Error> {
    Ok(Settings {
        id: Some(row.get(0)?),
        theme: row.get(1)?,
        number_of_hours: row.get(2)?,
        editable: row.get::<_, i32>(3)? != 0,
        use_system_theme: row.get::<_, i32>(4).unwrap_or(0) != 0,
    })
}
