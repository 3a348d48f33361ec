use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    Automation, AvailableDevice, Device, House, Room, RoomSettings, Scenario, User,
};

use super::seed;
use super::{NewAutomation, NewDevice, NewScenario, NewUser, Store, StoreError};

/// Development/test backend: plain ordered vectors behind one lock, so a
/// multi-step mutation is a single critical section. Ids carry a type tag
/// (`house-<uuid>`) for debuggability. Nothing here is durable.
pub struct MemStore {
    data: RwLock<MemData>,
}

#[derive(Default)]
pub struct MemData {
    pub users: Vec<User>,
    pub houses: Vec<House>,
    pub rooms: Vec<Room>,
    pub devices: Vec<Device>,
    pub available_devices: Vec<AvailableDevice>,
    pub automations: Vec<Automation>,
    pub scenarios: Vec<Scenario>,
}

impl MemStore {
    pub fn new(data: MemData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    pub fn empty() -> Self {
        Self::new(MemData::default())
    }

    /// The fixed demo fixture set: one user (`user@example.com` /
    /// `password123`), one house, two rooms, four devices, three available
    /// devices, one automation, one scenario.
    pub fn seeded() -> Self {
        Self::new(seed::demo_data())
    }
}

fn tagged_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

#[async_trait]
impl Store for MemStore {
    async fn insert_user(&self, new: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: tagged_id("user"),
            name: new.name,
            email: new.email,
            password: new.password,
            houses: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        };

        let mut data = self.data.write().await;
        data.users.push(user.clone());

        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.email == email).cloned())
    }

    async fn houses_for_owner(&self, owner_id: &str) -> Result<Vec<House>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .houses
            .iter()
            .filter(|h| h.owner == owner_id)
            .cloned()
            .collect())
    }

    async fn find_house_for_owner(
        &self,
        house_id: &str,
        owner_id: &str,
    ) -> Result<Option<House>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .houses
            .iter()
            .find(|h| h.id == house_id && h.owner == owner_id)
            .cloned())
    }

    async fn insert_house(
        &self,
        owner_id: &str,
        name: &str,
    ) -> Result<Option<House>, StoreError> {
        let mut data = self.data.write().await;

        let Some(owner_index) = data.users.iter().position(|u| u.id == owner_id) else {
            return Ok(None);
        };

        let house = House {
            id: tagged_id("house"),
            name: name.to_string(),
            owner: owner_id.to_string(),
            rooms: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        };
        data.users[owner_index].houses.push(house.id.clone());
        data.houses.push(house.clone());

        Ok(Some(house))
    }

    async fn save_house(&self, house: &House) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        match data.houses.iter_mut().find(|h| h.id == house.id) {
            Some(existing) => {
                *existing = house.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_house(&self, house_id: &str, owner_id: &str) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;

        let Some(index) = data
            .houses
            .iter()
            .position(|h| h.id == house_id && h.owner == owner_id)
        else {
            return Ok(false);
        };
        data.houses.remove(index);

        let doomed_rooms: Vec<String> = data
            .rooms
            .iter()
            .filter(|r| r.house == house_id)
            .map(|r| r.id.clone())
            .collect();
        data.devices.retain(|d| !doomed_rooms.contains(&d.room));
        data.rooms.retain(|r| r.house != house_id);

        if let Some(owner) = data.users.iter_mut().find(|u| u.id == owner_id) {
            owner.houses.retain(|id| id != house_id);
        }

        Ok(true)
    }

    async fn rooms_in_house(&self, house_id: &str) -> Result<Vec<Room>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .rooms
            .iter()
            .filter(|r| r.house == house_id)
            .cloned()
            .collect())
    }

    async fn find_room(&self, room_id: &str) -> Result<Option<Room>, StoreError> {
        let data = self.data.read().await;
        Ok(data.rooms.iter().find(|r| r.id == room_id).cloned())
    }

    async fn insert_room(&self, house_id: &str, name: &str) -> Result<Option<Room>, StoreError> {
        let mut data = self.data.write().await;

        let Some(house_index) = data.houses.iter().position(|h| h.id == house_id) else {
            return Ok(None);
        };

        let room = Room {
            id: tagged_id("room"),
            name: name.to_string(),
            house: house_id.to_string(),
            devices: Vec::new(),
            settings: RoomSettings::default(),
            created_at: OffsetDateTime::now_utc(),
        };
        data.houses[house_index].rooms.push(room.id.clone());
        data.rooms.push(room.clone());

        Ok(Some(room))
    }

    async fn save_room(&self, room: &Room) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        match data.rooms.iter_mut().find(|r| r.id == room.id) {
            Some(existing) => {
                *existing = room.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_room(&self, room_id: &str) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;

        let Some(index) = data.rooms.iter().position(|r| r.id == room_id) else {
            return Ok(false);
        };
        let house_id = data.rooms[index].house.clone();
        data.rooms.remove(index);
        data.devices.retain(|d| d.room != room_id);

        if let Some(house) = data.houses.iter_mut().find(|h| h.id == house_id) {
            house.rooms.retain(|id| id != room_id);
        }

        Ok(true)
    }

    async fn devices_in_room(&self, room_id: &str) -> Result<Vec<Device>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .devices
            .iter()
            .filter(|d| d.room == room_id)
            .cloned()
            .collect())
    }

    async fn find_device(&self, device_id: &str) -> Result<Option<Device>, StoreError> {
        let data = self.data.read().await;
        Ok(data.devices.iter().find(|d| d.id == device_id).cloned())
    }

    async fn insert_device(
        &self,
        room_id: &str,
        new: NewDevice,
    ) -> Result<Option<Device>, StoreError> {
        let mut data = self.data.write().await;

        let Some(room_index) = data.rooms.iter().position(|r| r.id == room_id) else {
            return Ok(None);
        };

        let device = Device {
            id: tagged_id("device"),
            name: new.name,
            room: room_id.to_string(),
            device_type: new.device_type,
            category: new.category,
            status: new.status,
            paired_from: new.paired_from,
            created_at: OffsetDateTime::now_utc(),
        };
        data.rooms[room_index].devices.push(device.id.clone());
        data.devices.push(device.clone());

        Ok(Some(device))
    }

    async fn save_device(&self, device: &Device) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        match data.devices.iter_mut().find(|d| d.id == device.id) {
            Some(existing) => {
                *existing = device.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_device(&self, device_id: &str) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;

        let Some(index) = data.devices.iter().position(|d| d.id == device_id) else {
            return Ok(false);
        };
        let room_id = data.devices[index].room.clone();
        data.devices.remove(index);

        if let Some(room) = data.rooms.iter_mut().find(|r| r.id == room_id) {
            room.devices.retain(|id| id != device_id);
        }

        Ok(true)
    }

    async fn available_devices_for_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<AvailableDevice>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .available_devices
            .iter()
            .filter(|ad| {
                ad.owner == owner_id
                    && !data
                        .devices
                        .iter()
                        .any(|d| d.paired_from.as_deref() == Some(ad.id.as_str()))
            })
            .cloned()
            .collect())
    }

    async fn find_available_device(
        &self,
        available_id: &str,
    ) -> Result<Option<AvailableDevice>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .available_devices
            .iter()
            .find(|ad| ad.id == available_id)
            .cloned())
    }

    async fn is_paired(&self, available_id: &str) -> Result<bool, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .devices
            .iter()
            .any(|d| d.paired_from.as_deref() == Some(available_id)))
    }

    async fn automations_for_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<Automation>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .automations
            .iter()
            .filter(|a| a.owner == owner_id)
            .cloned()
            .collect())
    }

    async fn find_automation_for_owner(
        &self,
        automation_id: &str,
        owner_id: &str,
    ) -> Result<Option<Automation>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .automations
            .iter()
            .find(|a| a.id == automation_id && a.owner == owner_id)
            .cloned())
    }

    async fn insert_automation(
        &self,
        owner_id: &str,
        new: NewAutomation,
    ) -> Result<Automation, StoreError> {
        let automation = Automation {
            id: tagged_id("auto"),
            name: new.name,
            owner: owner_id.to_string(),
            trigger: new.trigger,
            action: new.action,
            is_enabled: new.is_enabled,
            created_at: OffsetDateTime::now_utc(),
        };

        let mut data = self.data.write().await;
        data.automations.push(automation.clone());

        Ok(automation)
    }

    async fn save_automation(&self, automation: &Automation) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        match data
            .automations
            .iter_mut()
            .find(|a| a.id == automation.id && a.owner == automation.owner)
        {
            Some(existing) => {
                *existing = automation.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_automation(
        &self,
        automation_id: &str,
        owner_id: &str,
    ) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        let Some(index) = data
            .automations
            .iter()
            .position(|a| a.id == automation_id && a.owner == owner_id)
        else {
            return Ok(false);
        };
        data.automations.remove(index);

        Ok(true)
    }

    async fn scenarios_for_owner(&self, owner_id: &str) -> Result<Vec<Scenario>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .scenarios
            .iter()
            .filter(|s| s.owner == owner_id)
            .cloned()
            .collect())
    }

    async fn find_scenario_for_owner(
        &self,
        scenario_id: &str,
        owner_id: &str,
    ) -> Result<Option<Scenario>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .scenarios
            .iter()
            .find(|s| s.id == scenario_id && s.owner == owner_id)
            .cloned())
    }

    async fn insert_scenario(
        &self,
        owner_id: &str,
        new: NewScenario,
    ) -> Result<Scenario, StoreError> {
        let scenario = Scenario {
            id: tagged_id("scene"),
            name: new.name,
            owner: owner_id.to_string(),
            actions: new.actions,
            created_at: OffsetDateTime::now_utc(),
        };

        let mut data = self.data.write().await;
        data.scenarios.push(scenario.clone());

        Ok(scenario)
    }

    async fn save_scenario(&self, scenario: &Scenario) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        match data
            .scenarios
            .iter_mut()
            .find(|s| s.id == scenario.id && s.owner == scenario.owner)
        {
            Some(existing) => {
                *existing = scenario.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_scenario(
        &self,
        scenario_id: &str,
        owner_id: &str,
    ) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        let Some(index) = data
            .scenarios
            .iter()
            .position(|s| s.id == scenario_id && s.owner == owner_id)
        else {
            return Ok(false);
        };
        data.scenarios.remove(index);

        Ok(true)
    }
}
