use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub house: String,
    pub devices: Vec<String>,
    pub settings: RoomSettings,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSettings {
    pub temperature: f64,
    /// Brightness percentage, 0-100.
    pub lighting: u8,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            temperature: 21.0,
            lighting: 100,
        }
    }
}

pub struct RoomTable;

impl Table for RoomTable {
    fn name(&self) -> &'static str {
        "rooms"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS rooms (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                house TEXT NOT NULL,
                devices TEXT NOT NULL,
                settings TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY (house) REFERENCES houses (id)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS rooms;")
    }
}
