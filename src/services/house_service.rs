use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::House;
use crate::store::Store;

use super::Removed;

const HOUSE_NOT_ACCESSIBLE: &str = "House not found or you do not have access";
const HOUSE_NOT_OWNED: &str = "House not found or you are not the owner";

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHouseRequest {
    pub name: Option<String>,
}

/// House CRUD, always scoped to the owning user. A house that exists but
/// belongs to someone else is reported exactly like a missing one.
pub struct HouseService {
    store: Arc<dyn Store>,
}

impl HouseService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get_houses_for_user(&self, owner_id: &str) -> Result<Vec<House>, ApiError> {
        Ok(self.store.houses_for_owner(owner_id).await?)
    }

    pub async fn get_house_by_id(
        &self,
        house_id: &str,
        owner_id: &str,
    ) -> Result<House, ApiError> {
        self.store
            .find_house_for_owner(house_id, owner_id)
            .await?
            .ok_or_else(|| ApiError::not_found(HOUSE_NOT_ACCESSIBLE))
    }

    pub async fn add_house(&self, owner_id: &str, name: &str) -> Result<House, ApiError> {
        if name.is_empty() {
            return Err(ApiError::validation("House name is required"));
        }

        self.store
            .insert_house(owner_id, name)
            .await?
            .ok_or_else(|| ApiError::not_found("User not found"))
    }

    pub async fn update_house(
        &self,
        house_id: &str,
        owner_id: &str,
        updates: UpdateHouseRequest,
    ) -> Result<House, ApiError> {
        let mut house = self.get_house_by_id(house_id, owner_id).await?;

        if let Some(name) = updates.name {
            house.name = name;
        }

        if !self.store.save_house(&house).await? {
            return Err(ApiError::not_found(HOUSE_NOT_ACCESSIBLE));
        }

        Ok(house)
    }

    pub async fn remove_house(&self, house_id: &str, owner_id: &str) -> Result<Removed, ApiError> {
        if !self.store.delete_house(house_id, owner_id).await? {
            return Err(ApiError::not_found(HOUSE_NOT_OWNED));
        }

        Ok(Removed::new(house_id))
    }
}

#[cfg(test)]
mod tests {
    use crate::store::MemStore;

    use super::*;

    #[tokio::test]
    async fn test_house_id_appears_once_in_owner_list() {
        let store: Arc<dyn Store> = Arc::new(MemStore::seeded());
        let service = HouseService::new(store.clone());

        let house = service.add_house("user-1", "Summer Cabin").await.unwrap();

        let owner = store.find_user_by_id("user-1").await.unwrap().unwrap();
        assert_eq!(
            owner.houses.iter().filter(|id| **id == house.id).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_foreign_house_reads_as_missing() {
        let service = HouseService::new(Arc::new(MemStore::seeded()));

        let result = service.get_house_by_id("house-1", "user-2").await;

        match result {
            Err(ApiError::NotFound(message)) => assert_eq!(message, HOUSE_NOT_ACCESSIBLE),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_second_removal_is_not_found() {
        let service = HouseService::new(Arc::new(MemStore::seeded()));

        let removed = service.remove_house("house-1", "user-1").await.unwrap();
        assert_eq!(removed.id, "house-1");
        assert_eq!(removed.status, "removed");

        let again = service.remove_house("house-1", "user-1").await;
        assert!(matches!(again, Err(ApiError::NotFound(_))));
    }
}
