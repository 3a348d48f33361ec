mod memory;
mod seed;
mod sql;

pub use memory::MemStore;
pub use sql::SqlStore;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::configs::{Database, SchemaManager};
use crate::models::{
    Automation, AvailableDevice, Device, DeviceCommand, DeviceType, House, Room, Scenario,
    Trigger, User,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("corrupt stored record: {0}")]
    Corrupt(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Corrupt(err.to_string())
    }
}

pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Already hashed.
    pub password: String,
}

pub struct NewDevice {
    pub name: String,
    pub device_type: DeviceType,
    pub category: String,
    pub status: Value,
    pub paired_from: Option<String>,
}

pub struct NewAutomation {
    pub name: String,
    pub trigger: Trigger,
    pub action: DeviceCommand,
    pub is_enabled: bool,
}

pub struct NewScenario {
    pub name: String,
    pub actions: Vec<DeviceCommand>,
}

/// Single capability contract both backends satisfy. Services hold an
/// `Arc<dyn Store>` and never know which implementation they talk to.
///
/// Multi-step mutations (insert + parent-list append, delete + detach,
/// cascade on house removal) are atomic inside each implementation: a
/// transaction in [`SqlStore`], one write-lock critical section in
/// [`MemStore`].
///
/// `insert_*` methods returning `Option` yield `None` when the parent
/// record is missing. `save_*`/`delete_*` return `false` when the target
/// no longer exists.
#[async_trait]
pub trait Store: Send + Sync {
    // Users
    async fn insert_user(&self, new: NewUser) -> Result<User, StoreError>;
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    // Houses
    async fn houses_for_owner(&self, owner_id: &str) -> Result<Vec<House>, StoreError>;
    async fn find_house_for_owner(
        &self,
        house_id: &str,
        owner_id: &str,
    ) -> Result<Option<House>, StoreError>;
    async fn insert_house(&self, owner_id: &str, name: &str)
        -> Result<Option<House>, StoreError>;
    async fn save_house(&self, house: &House) -> Result<bool, StoreError>;
    /// Removes the house, its rooms and their devices, and detaches the
    /// house id from the owner's list. `false` when the house does not
    /// exist or is not owned by `owner_id`.
    async fn delete_house(&self, house_id: &str, owner_id: &str) -> Result<bool, StoreError>;

    // Rooms
    async fn rooms_in_house(&self, house_id: &str) -> Result<Vec<Room>, StoreError>;
    async fn find_room(&self, room_id: &str) -> Result<Option<Room>, StoreError>;
    async fn insert_room(&self, house_id: &str, name: &str) -> Result<Option<Room>, StoreError>;
    async fn save_room(&self, room: &Room) -> Result<bool, StoreError>;
    async fn delete_room(&self, room_id: &str) -> Result<bool, StoreError>;

    // Devices
    async fn devices_in_room(&self, room_id: &str) -> Result<Vec<Device>, StoreError>;
    async fn find_device(&self, device_id: &str) -> Result<Option<Device>, StoreError>;
    async fn insert_device(
        &self,
        room_id: &str,
        new: NewDevice,
    ) -> Result<Option<Device>, StoreError>;
    async fn save_device(&self, device: &Device) -> Result<bool, StoreError>;
    async fn delete_device(&self, device_id: &str) -> Result<bool, StoreError>;

    // Available devices
    async fn available_devices_for_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<AvailableDevice>, StoreError>;
    async fn find_available_device(
        &self,
        available_id: &str,
    ) -> Result<Option<AvailableDevice>, StoreError>;
    /// Whether any device already references this available device as its
    /// pairing origin.
    async fn is_paired(&self, available_id: &str) -> Result<bool, StoreError>;

    // Automations
    async fn automations_for_owner(&self, owner_id: &str)
        -> Result<Vec<Automation>, StoreError>;
    async fn find_automation_for_owner(
        &self,
        automation_id: &str,
        owner_id: &str,
    ) -> Result<Option<Automation>, StoreError>;
    async fn insert_automation(
        &self,
        owner_id: &str,
        new: NewAutomation,
    ) -> Result<Automation, StoreError>;
    async fn save_automation(&self, automation: &Automation) -> Result<bool, StoreError>;
    async fn delete_automation(
        &self,
        automation_id: &str,
        owner_id: &str,
    ) -> Result<bool, StoreError>;

    // Scenarios
    async fn scenarios_for_owner(&self, owner_id: &str) -> Result<Vec<Scenario>, StoreError>;
    async fn find_scenario_for_owner(
        &self,
        scenario_id: &str,
        owner_id: &str,
    ) -> Result<Option<Scenario>, StoreError>;
    async fn insert_scenario(
        &self,
        owner_id: &str,
        new: NewScenario,
    ) -> Result<Scenario, StoreError>;
    async fn save_scenario(&self, scenario: &Scenario) -> Result<bool, StoreError>;
    async fn delete_scenario(
        &self,
        scenario_id: &str,
        owner_id: &str,
    ) -> Result<bool, StoreError>;
}

/// One probe at process start. A configured and reachable database selects
/// the persistent store for the whole process lifetime; anything else
/// yields a freshly seeded in-memory store. No service ever re-probes.
pub async fn bootstrap_store(database: &Database) -> Arc<dyn Store> {
    match &database.url {
        Some(url) => {
            match SqlStore::connect(url, SchemaManager::default(), database.clean_start).await {
                Ok(store) => {
                    tracing::info!("connected to database at {url}");
                    Arc::new(store)
                }
                Err(err) => {
                    tracing::warn!("database connection failed ({err}), using in-memory fixtures");
                    Arc::new(MemStore::seeded())
                }
            }
        }
        None => {
            tracing::warn!("no database url configured, using in-memory fixtures");
            Arc::new(MemStore::seeded())
        }
    }
}
