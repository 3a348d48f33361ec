use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::{Room, RoomSettings};
use crate::store::Store;

use super::Removed;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    pub settings: Option<RoomSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightingRequest {
    pub lighting: u8,
}

/// Room CRUD plus the two comfort knobs (temperature, lighting). Rooms are
/// looked up by id without owner scoping, matching the parent-scoped query
/// contract.
pub struct RoomService {
    store: Arc<dyn Store>,
}

impl RoomService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get_rooms_in_house(&self, house_id: &str) -> Result<Vec<Room>, ApiError> {
        Ok(self.store.rooms_in_house(house_id).await?)
    }

    pub async fn get_room_by_id(&self, room_id: &str) -> Result<Room, ApiError> {
        self.store
            .find_room(room_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Room not found"))
    }

    pub async fn add_room_to_house(&self, house_id: &str, name: &str) -> Result<Room, ApiError> {
        if name.is_empty() {
            return Err(ApiError::validation("Room name is required"));
        }

        self.store
            .insert_room(house_id, name)
            .await?
            .ok_or_else(|| ApiError::not_found("House not found"))
    }

    pub async fn update_room(
        &self,
        room_id: &str,
        updates: UpdateRoomRequest,
    ) -> Result<Room, ApiError> {
        let mut room = self.get_room_by_id(room_id).await?;

        if let Some(name) = updates.name {
            room.name = name;
        }
        if let Some(settings) = updates.settings {
            room.settings = settings;
        }

        if !self.store.save_room(&room).await? {
            return Err(ApiError::not_found("Room not found"));
        }

        Ok(room)
    }

    pub async fn remove_room(&self, room_id: &str) -> Result<Removed, ApiError> {
        if !self.store.delete_room(room_id).await? {
            return Err(ApiError::not_found("Room not found"));
        }

        Ok(Removed::new(room_id))
    }

    pub async fn set_room_temperature(
        &self,
        room_id: &str,
        temperature: f64,
    ) -> Result<RoomSettings, ApiError> {
        let mut room = self.get_room_by_id(room_id).await?;
        room.settings.temperature = temperature;

        if !self.store.save_room(&room).await? {
            return Err(ApiError::not_found("Room not found"));
        }

        Ok(room.settings)
    }

    pub async fn control_room_lighting(
        &self,
        room_id: &str,
        lighting: u8,
    ) -> Result<RoomSettings, ApiError> {
        if lighting > 100 {
            return Err(ApiError::validation("Lighting must be between 0 and 100"));
        }

        let mut room = self.get_room_by_id(room_id).await?;
        room.settings.lighting = lighting;

        if !self.store.save_room(&room).await? {
            return Err(ApiError::not_found("Room not found"));
        }

        Ok(room.settings)
    }
}

#[cfg(test)]
mod tests {
    use crate::store::MemStore;

    use super::*;

    #[tokio::test]
    async fn test_removed_room_detaches_from_house() {
        let store: Arc<dyn Store> = Arc::new(MemStore::seeded());
        let service = RoomService::new(store.clone());

        service.remove_room("room-2").await.unwrap();

        let house = store
            .find_house_for_owner("house-1", "user-1")
            .await
            .unwrap()
            .unwrap();
        assert!(!house.rooms.contains(&"room-2".to_string()));

        let again = service.remove_room("room-2").await;
        assert!(matches!(again, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_room_to_missing_house() {
        let service = RoomService::new(Arc::new(MemStore::seeded()));

        let result = service.add_room_to_house("house-999", "Attic").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_lighting_range_is_validated() {
        let service = RoomService::new(Arc::new(MemStore::seeded()));

        let result = service.control_room_lighting("room-1", 120).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let settings = service.control_room_lighting("room-1", 40).await.unwrap();
        assert_eq!(settings.lighting, 40);
    }
}
