use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::configs::SchemaManager;
use crate::models::{
    Automation, AvailableDevice, Device, DeviceCommand, DeviceType, House, Room, RoomSettings,
    Scenario, Trigger, User,
};

use super::{NewAutomation, NewDevice, NewScenario, NewUser, Store, StoreError};

/// Persistent backend over SQLite. Document-style list fields and
/// open-ended status maps live in JSON text columns.
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub async fn connect(
        url: &str,
        schema: SchemaManager,
        clean_start: bool,
    ) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1) // in-memory db might drop connection when 0
            .max_connections(10)
            .connect(url)
            .await?;

        if clean_start {
            for statement in schema.dispose_schema() {
                sqlx::query(&statement).execute(&pool).await?;
            }
        }
        for statement in schema.create_schema() {
            sqlx::query(&statement).execute(&pool).await?;
        }

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

fn format_ts(stamp: &OffsetDateTime) -> Result<String, StoreError> {
    stamp
        .format(&Rfc3339)
        .map_err(|e| StoreError::Corrupt(e.to_string()))
}

fn parse_ts(raw: &str) -> Result<OffsetDateTime, StoreError> {
    OffsetDateTime::parse(raw, &Rfc3339).map_err(|e| StoreError::Corrupt(e.to_string()))
}

fn parse_device_type(raw: &str) -> Result<DeviceType, StoreError> {
    raw.parse()
        .map_err(|_| StoreError::Corrupt(format!("unknown device type: {raw}")))
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    password: String,
    houses: String,
    created_at: String,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
            houses: serde_json::from_str(&row.houses)?,
            created_at: parse_ts(&row.created_at)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct HouseRow {
    id: String,
    name: String,
    owner: String,
    rooms: String,
    created_at: String,
}

impl TryFrom<HouseRow> for House {
    type Error = StoreError;

    fn try_from(row: HouseRow) -> Result<Self, Self::Error> {
        Ok(House {
            id: row.id,
            name: row.name,
            owner: row.owner,
            rooms: serde_json::from_str(&row.rooms)?,
            created_at: parse_ts(&row.created_at)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: String,
    name: String,
    house: String,
    devices: String,
    settings: String,
    created_at: String,
}

impl TryFrom<RoomRow> for Room {
    type Error = StoreError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        Ok(Room {
            id: row.id,
            name: row.name,
            house: row.house,
            devices: serde_json::from_str(&row.devices)?,
            settings: serde_json::from_str::<RoomSettings>(&row.settings)?,
            created_at: parse_ts(&row.created_at)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct DeviceRow {
    id: String,
    name: String,
    room: String,
    device_type: String,
    category: String,
    status: String,
    paired_from: Option<String>,
    created_at: String,
}

impl TryFrom<DeviceRow> for Device {
    type Error = StoreError;

    fn try_from(row: DeviceRow) -> Result<Self, Self::Error> {
        Ok(Device {
            id: row.id,
            name: row.name,
            room: row.room,
            device_type: parse_device_type(&row.device_type)?,
            category: row.category,
            status: serde_json::from_str(&row.status)?,
            paired_from: row.paired_from,
            created_at: parse_ts(&row.created_at)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AvailableDeviceRow {
    id: String,
    owner: String,
    name: String,
    device_type: String,
    category: String,
    description: String,
    status: String,
}

impl TryFrom<AvailableDeviceRow> for AvailableDevice {
    type Error = StoreError;

    fn try_from(row: AvailableDeviceRow) -> Result<Self, Self::Error> {
        Ok(AvailableDevice {
            id: row.id,
            owner: row.owner,
            name: row.name,
            device_type: parse_device_type(&row.device_type)?,
            category: row.category,
            description: row.description,
            status: serde_json::from_str(&row.status)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AutomationRow {
    id: String,
    name: String,
    owner: String,
    trigger_spec: String,
    action: String,
    is_enabled: i64,
    created_at: String,
}

impl TryFrom<AutomationRow> for Automation {
    type Error = StoreError;

    fn try_from(row: AutomationRow) -> Result<Self, Self::Error> {
        Ok(Automation {
            id: row.id,
            name: row.name,
            owner: row.owner,
            trigger: serde_json::from_str::<Trigger>(&row.trigger_spec)?,
            action: serde_json::from_str::<DeviceCommand>(&row.action)?,
            is_enabled: row.is_enabled != 0,
            created_at: parse_ts(&row.created_at)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ScenarioRow {
    id: String,
    name: String,
    owner: String,
    actions: String,
    created_at: String,
}

impl TryFrom<ScenarioRow> for Scenario {
    type Error = StoreError;

    fn try_from(row: ScenarioRow) -> Result<Self, Self::Error> {
        Ok(Scenario {
            id: row.id,
            name: row.name,
            owner: row.owner,
            actions: serde_json::from_str(&row.actions)?,
            created_at: parse_ts(&row.created_at)?,
        })
    }
}

fn collect<R, T>(rows: Vec<R>) -> Result<Vec<T>, StoreError>
where
    T: TryFrom<R, Error = StoreError>,
{
    rows.into_iter().map(T::try_from).collect()
}

#[async_trait]
impl Store for SqlStore {
    async fn insert_user(&self, new: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: fresh_id(),
            name: new.name,
            email: new.email,
            password: new.password,
            houses: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password, houses, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(serde_json::to_string(&user.houses)?)
        .bind(format_ts(&user.created_at)?)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn houses_for_owner(&self, owner_id: &str) -> Result<Vec<House>, StoreError> {
        let rows: Vec<HouseRow> = sqlx::query_as("SELECT * FROM houses WHERE owner = $1")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;

        collect(rows)
    }

    async fn find_house_for_owner(
        &self,
        house_id: &str,
        owner_id: &str,
    ) -> Result<Option<House>, StoreError> {
        let row: Option<HouseRow> =
            sqlx::query_as("SELECT * FROM houses WHERE id = $1 AND owner = $2")
                .bind(house_id)
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(House::try_from).transpose()
    }

    async fn insert_house(
        &self,
        owner_id: &str,
        name: &str,
    ) -> Result<Option<House>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let owner: Option<(String,)> = sqlx::query_as("SELECT houses FROM users WHERE id = $1")
            .bind(owner_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((houses_json,)) = owner else {
            return Ok(None);
        };

        let house = House {
            id: fresh_id(),
            name: name.to_string(),
            owner: owner_id.to_string(),
            rooms: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO houses (id, name, owner, rooms, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&house.id)
        .bind(&house.name)
        .bind(&house.owner)
        .bind(serde_json::to_string(&house.rooms)?)
        .bind(format_ts(&house.created_at)?)
        .execute(&mut *tx)
        .await?;

        let mut houses: Vec<String> = serde_json::from_str(&houses_json)?;
        houses.push(house.id.clone());
        sqlx::query("UPDATE users SET houses = $1 WHERE id = $2")
            .bind(serde_json::to_string(&houses)?)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(house))
    }

    async fn save_house(&self, house: &House) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE houses SET name = $1, rooms = $2 WHERE id = $3")
            .bind(&house.name)
            .bind(serde_json::to_string(&house.rooms)?)
            .bind(&house.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_house(&self, house_id: &str, owner_id: &str) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;

        let found: Option<(String,)> =
            sqlx::query_as("SELECT id FROM houses WHERE id = $1 AND owner = $2")
                .bind(house_id)
                .bind(owner_id)
                .fetch_optional(&mut *tx)
                .await?;
        if found.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM devices WHERE room IN (SELECT id FROM rooms WHERE house = $1)")
            .bind(house_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM rooms WHERE house = $1")
            .bind(house_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM houses WHERE id = $1")
            .bind(house_id)
            .execute(&mut *tx)
            .await?;

        let owner: Option<(String,)> = sqlx::query_as("SELECT houses FROM users WHERE id = $1")
            .bind(owner_id)
            .fetch_optional(&mut *tx)
            .await?;
        if let Some((houses_json,)) = owner {
            let mut houses: Vec<String> = serde_json::from_str(&houses_json)?;
            houses.retain(|id| id != house_id);
            sqlx::query("UPDATE users SET houses = $1 WHERE id = $2")
                .bind(serde_json::to_string(&houses)?)
                .bind(owner_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(true)
    }

    async fn rooms_in_house(&self, house_id: &str) -> Result<Vec<Room>, StoreError> {
        let rows: Vec<RoomRow> = sqlx::query_as("SELECT * FROM rooms WHERE house = $1")
            .bind(house_id)
            .fetch_all(&self.pool)
            .await?;

        collect(rows)
    }

    async fn find_room(&self, room_id: &str) -> Result<Option<Room>, StoreError> {
        let row: Option<RoomRow> = sqlx::query_as("SELECT * FROM rooms WHERE id = $1")
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Room::try_from).transpose()
    }

    async fn insert_room(&self, house_id: &str, name: &str) -> Result<Option<Room>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let house: Option<(String,)> = sqlx::query_as("SELECT rooms FROM houses WHERE id = $1")
            .bind(house_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((rooms_json,)) = house else {
            return Ok(None);
        };

        let room = Room {
            id: fresh_id(),
            name: name.to_string(),
            house: house_id.to_string(),
            devices: Vec::new(),
            settings: RoomSettings::default(),
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO rooms (id, name, house, devices, settings, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&room.id)
        .bind(&room.name)
        .bind(&room.house)
        .bind(serde_json::to_string(&room.devices)?)
        .bind(serde_json::to_string(&room.settings)?)
        .bind(format_ts(&room.created_at)?)
        .execute(&mut *tx)
        .await?;

        let mut rooms: Vec<String> = serde_json::from_str(&rooms_json)?;
        rooms.push(room.id.clone());
        sqlx::query("UPDATE houses SET rooms = $1 WHERE id = $2")
            .bind(serde_json::to_string(&rooms)?)
            .bind(house_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(room))
    }

    async fn save_room(&self, room: &Room) -> Result<bool, StoreError> {
        let result =
            sqlx::query("UPDATE rooms SET name = $1, devices = $2, settings = $3 WHERE id = $4")
                .bind(&room.name)
                .bind(serde_json::to_string(&room.devices)?)
                .bind(serde_json::to_string(&room.settings)?)
                .bind(&room.id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_room(&self, room_id: &str) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;

        let found: Option<(String,)> = sqlx::query_as("SELECT house FROM rooms WHERE id = $1")
            .bind(room_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((house_id,)) = found else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM devices WHERE room = $1")
            .bind(room_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(room_id)
            .execute(&mut *tx)
            .await?;

        let house: Option<(String,)> = sqlx::query_as("SELECT rooms FROM houses WHERE id = $1")
            .bind(&house_id)
            .fetch_optional(&mut *tx)
            .await?;
        if let Some((rooms_json,)) = house {
            let mut rooms: Vec<String> = serde_json::from_str(&rooms_json)?;
            rooms.retain(|id| id != room_id);
            sqlx::query("UPDATE houses SET rooms = $1 WHERE id = $2")
                .bind(serde_json::to_string(&rooms)?)
                .bind(&house_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(true)
    }

    async fn devices_in_room(&self, room_id: &str) -> Result<Vec<Device>, StoreError> {
        let rows: Vec<DeviceRow> = sqlx::query_as("SELECT * FROM devices WHERE room = $1")
            .bind(room_id)
            .fetch_all(&self.pool)
            .await?;

        collect(rows)
    }

    async fn find_device(&self, device_id: &str) -> Result<Option<Device>, StoreError> {
        let row: Option<DeviceRow> = sqlx::query_as("SELECT * FROM devices WHERE id = $1")
            .bind(device_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Device::try_from).transpose()
    }

    async fn insert_device(
        &self,
        room_id: &str,
        new: NewDevice,
    ) -> Result<Option<Device>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let room: Option<(String,)> = sqlx::query_as("SELECT devices FROM rooms WHERE id = $1")
            .bind(room_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((devices_json,)) = room else {
            return Ok(None);
        };

        let device = Device {
            id: fresh_id(),
            name: new.name,
            room: room_id.to_string(),
            device_type: new.device_type,
            category: new.category,
            status: new.status,
            paired_from: new.paired_from,
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO devices (id, name, room, device_type, category, status, paired_from, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&device.id)
        .bind(&device.name)
        .bind(&device.room)
        .bind(device.device_type.as_str())
        .bind(&device.category)
        .bind(serde_json::to_string(&device.status)?)
        .bind(&device.paired_from)
        .bind(format_ts(&device.created_at)?)
        .execute(&mut *tx)
        .await?;

        let mut devices: Vec<String> = serde_json::from_str(&devices_json)?;
        devices.push(device.id.clone());
        sqlx::query("UPDATE rooms SET devices = $1 WHERE id = $2")
            .bind(serde_json::to_string(&devices)?)
            .bind(room_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(device))
    }

    async fn save_device(&self, device: &Device) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE devices SET name = $1, device_type = $2, category = $3, status = $4
            WHERE id = $5
            "#,
        )
        .bind(&device.name)
        .bind(device.device_type.as_str())
        .bind(&device.category)
        .bind(serde_json::to_string(&device.status)?)
        .bind(&device.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_device(&self, device_id: &str) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;

        let found: Option<(String,)> = sqlx::query_as("SELECT room FROM devices WHERE id = $1")
            .bind(device_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((room_id,)) = found else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM devices WHERE id = $1")
            .bind(device_id)
            .execute(&mut *tx)
            .await?;

        let room: Option<(String,)> = sqlx::query_as("SELECT devices FROM rooms WHERE id = $1")
            .bind(&room_id)
            .fetch_optional(&mut *tx)
            .await?;
        if let Some((devices_json,)) = room {
            let mut devices: Vec<String> = serde_json::from_str(&devices_json)?;
            devices.retain(|id| id != device_id);
            sqlx::query("UPDATE rooms SET devices = $1 WHERE id = $2")
                .bind(serde_json::to_string(&devices)?)
                .bind(&room_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(true)
    }

    async fn available_devices_for_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<AvailableDevice>, StoreError> {
        let rows: Vec<AvailableDeviceRow> = sqlx::query_as(
            r#"
            SELECT ad.* FROM available_devices ad
                WHERE ad.owner = $1
                AND NOT EXISTS (SELECT 1 FROM devices d WHERE d.paired_from = ad.id)
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        collect(rows)
    }

    async fn find_available_device(
        &self,
        available_id: &str,
    ) -> Result<Option<AvailableDevice>, StoreError> {
        let row: Option<AvailableDeviceRow> =
            sqlx::query_as("SELECT * FROM available_devices WHERE id = $1")
                .bind(available_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(AvailableDevice::try_from).transpose()
    }

    async fn is_paired(&self, available_id: &str) -> Result<bool, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT id FROM devices WHERE paired_from = $1 LIMIT 1")
                .bind(available_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.is_some())
    }

    async fn automations_for_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<Automation>, StoreError> {
        let rows: Vec<AutomationRow> =
            sqlx::query_as("SELECT * FROM automations WHERE owner = $1")
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await?;

        collect(rows)
    }

    async fn find_automation_for_owner(
        &self,
        automation_id: &str,
        owner_id: &str,
    ) -> Result<Option<Automation>, StoreError> {
        let row: Option<AutomationRow> =
            sqlx::query_as("SELECT * FROM automations WHERE id = $1 AND owner = $2")
                .bind(automation_id)
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(Automation::try_from).transpose()
    }

    async fn insert_automation(
        &self,
        owner_id: &str,
        new: NewAutomation,
    ) -> Result<Automation, StoreError> {
        let automation = Automation {
            id: fresh_id(),
            name: new.name,
            owner: owner_id.to_string(),
            trigger: new.trigger,
            action: new.action,
            is_enabled: new.is_enabled,
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO automations (id, name, owner, trigger_spec, action, is_enabled, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&automation.id)
        .bind(&automation.name)
        .bind(&automation.owner)
        .bind(serde_json::to_string(&automation.trigger)?)
        .bind(serde_json::to_string(&automation.action)?)
        .bind(automation.is_enabled as i64)
        .bind(format_ts(&automation.created_at)?)
        .execute(&self.pool)
        .await?;

        Ok(automation)
    }

    async fn save_automation(&self, automation: &Automation) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE automations SET name = $1, trigger_spec = $2, action = $3, is_enabled = $4
            WHERE id = $5 AND owner = $6
            "#,
        )
        .bind(&automation.name)
        .bind(serde_json::to_string(&automation.trigger)?)
        .bind(serde_json::to_string(&automation.action)?)
        .bind(automation.is_enabled as i64)
        .bind(&automation.id)
        .bind(&automation.owner)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_automation(
        &self,
        automation_id: &str,
        owner_id: &str,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM automations WHERE id = $1 AND owner = $2")
            .bind(automation_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn scenarios_for_owner(&self, owner_id: &str) -> Result<Vec<Scenario>, StoreError> {
        let rows: Vec<ScenarioRow> = sqlx::query_as("SELECT * FROM scenarios WHERE owner = $1")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;

        collect(rows)
    }

    async fn find_scenario_for_owner(
        &self,
        scenario_id: &str,
        owner_id: &str,
    ) -> Result<Option<Scenario>, StoreError> {
        let row: Option<ScenarioRow> =
            sqlx::query_as("SELECT * FROM scenarios WHERE id = $1 AND owner = $2")
                .bind(scenario_id)
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(Scenario::try_from).transpose()
    }

    async fn insert_scenario(
        &self,
        owner_id: &str,
        new: NewScenario,
    ) -> Result<Scenario, StoreError> {
        let scenario = Scenario {
            id: fresh_id(),
            name: new.name,
            owner: owner_id.to_string(),
            actions: new.actions,
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO scenarios (id, name, owner, actions, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&scenario.id)
        .bind(&scenario.name)
        .bind(&scenario.owner)
        .bind(serde_json::to_string(&scenario.actions)?)
        .bind(format_ts(&scenario.created_at)?)
        .execute(&self.pool)
        .await?;

        Ok(scenario)
    }

    async fn save_scenario(&self, scenario: &Scenario) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE scenarios SET name = $1, actions = $2
            WHERE id = $3 AND owner = $4
            "#,
        )
        .bind(&scenario.name)
        .bind(serde_json::to_string(&scenario.actions)?)
        .bind(&scenario.id)
        .bind(&scenario.owner)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_scenario(
        &self,
        scenario_id: &str,
        owner_id: &str,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM scenarios WHERE id = $1 AND owner = $2")
            .bind(scenario_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
