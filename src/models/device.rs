use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use super::Table;

/// Canonical set of device kinds accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Light,
    Thermostat,
    Security,
    Media,
    Outlet,
    Sensor,
    Other,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Light => "light",
            DeviceType::Thermostat => "thermostat",
            DeviceType::Security => "security",
            DeviceType::Media => "media",
            DeviceType::Outlet => "outlet",
            DeviceType::Sensor => "sensor",
            DeviceType::Other => "other",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "light" => Ok(DeviceType::Light),
            "thermostat" => Ok(DeviceType::Thermostat),
            "security" => Ok(DeviceType::Security),
            "media" => Ok(DeviceType::Media),
            "outlet" => Ok(DeviceType::Outlet),
            "sensor" => Ok(DeviceType::Sensor),
            "other" => Ok(DeviceType::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    pub room: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub category: String,
    /// Open-ended key-value state, e.g. { "isOn": true, "brightness": 80 }.
    /// The shape varies by device type.
    pub status: Value,
    /// Id of the available device this one was paired from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paired_from: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A discoverable-but-unpaired device. Pairing copies its template fields
/// into a new `Device`; the record itself is kept and only filtered out of
/// "available" queries once some device references it via `paired_from`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableDevice {
    pub id: String,
    pub owner: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub category: String,
    pub description: String,
    pub status: Value,
}

/// A single command addressed to a device, used by automations and scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCommand {
    pub device_id: String,
    pub command: Value,
}

pub struct DeviceTable;

impl Table for DeviceTable {
    fn name(&self) -> &'static str {
        "devices"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS devices (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                room TEXT NOT NULL,
                device_type TEXT NOT NULL,
                category TEXT NOT NULL,
                status TEXT NOT NULL,
                paired_from TEXT,
                created_at TEXT NOT NULL,
                FOREIGN KEY (room) REFERENCES rooms (id)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS devices;")
    }
}

pub struct AvailableDeviceTable;

impl Table for AvailableDeviceTable {
    fn name(&self) -> &'static str {
        "available_devices"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS available_devices (
                id TEXT PRIMARY KEY,
                owner TEXT NOT NULL,
                name TEXT NOT NULL,
                device_type TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                status TEXT NOT NULL,
                FOREIGN KEY (owner) REFERENCES users (id)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS available_devices;")
    }
}
