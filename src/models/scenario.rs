use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;
use super::device::DeviceCommand;

/// A multi-device routine. Requires at least two actions at creation time;
/// updates are not re-validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub actions: Vec<DeviceCommand>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub struct ScenarioTable;

impl Table for ScenarioTable {
    fn name(&self) -> &'static str {
        "scenarios"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS scenarios (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                owner TEXT NOT NULL,
                actions TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY (owner) REFERENCES users (id)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS scenarios;")
    }
}
