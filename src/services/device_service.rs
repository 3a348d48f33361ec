use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use time::OffsetDateTime;

use crate::errors::ApiError;
use crate::models::{AvailableDevice, Device, DeviceType};
use crate::store::{NewDevice, Store};

use super::Removed;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDeviceRequest {
    /// When set, the device is created by pairing: template fields are
    /// copied from the available device and the rest of the body is
    /// ignored.
    pub available_device_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<DeviceType>,
    pub category: Option<String>,
    pub status: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<DeviceType>,
    pub category: Option<String>,
    pub status: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatusView {
    pub status: Value,
    #[serde(with = "time::serde::rfc3339")]
    pub last_active: OffsetDateTime,
}

/// Shallow key-level merge: patch keys overwrite, everything else is kept.
/// Non-object operands degrade to whole-value replacement.
pub(crate) fn merge_status(base: &mut Value, patch: &Value) {
    if let Some(patch_map) = patch.as_object() {
        if let Some(base_map) = base.as_object_mut() {
            for (key, value) in patch_map {
                base_map.insert(key.clone(), value.clone());
            }
            return;
        }
    }
    *base = patch.clone();
}

/// Device CRUD, discovery and control. Pairing turns an available device
/// into a room-assigned one without deleting the discovery record.
pub struct DeviceService {
    store: Arc<dyn Store>,
}

impl DeviceService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get_devices_in_room(&self, room_id: &str) -> Result<Vec<Device>, ApiError> {
        Ok(self.store.devices_in_room(room_id).await?)
    }

    pub async fn get_available_devices_for_user(
        &self,
        owner_id: &str,
    ) -> Result<Vec<AvailableDevice>, ApiError> {
        Ok(self.store.available_devices_for_owner(owner_id).await?)
    }

    pub async fn get_device_by_id(&self, device_id: &str) -> Result<Device, ApiError> {
        self.store
            .find_device(device_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Device not found"))
    }

    pub async fn add_device_to_room(
        &self,
        room_id: &str,
        owner_id: &str,
        request: AddDeviceRequest,
    ) -> Result<Device, ApiError> {
        let new = match request.available_device_id {
            Some(available_id) => self.pairing_template(&available_id, owner_id).await?,
            None => {
                let name = match request.name {
                    Some(name) if !name.is_empty() => name,
                    _ => return Err(ApiError::validation("Device name is required")),
                };
                let category = match request.category {
                    Some(category) if !category.is_empty() => category,
                    _ => return Err(ApiError::validation("Device category is required")),
                };

                NewDevice {
                    name,
                    device_type: request.device_type.unwrap_or(DeviceType::Other),
                    category,
                    status: request.status.unwrap_or_else(|| json!({ "isOn": false })),
                    paired_from: None,
                }
            }
        };

        self.store
            .insert_device(room_id, new)
            .await?
            .ok_or_else(|| ApiError::not_found("Room not found"))
    }

    /// Ownership mismatch reads exactly like absence; an already-paired
    /// device cannot be paired twice.
    async fn pairing_template(
        &self,
        available_id: &str,
        owner_id: &str,
    ) -> Result<NewDevice, ApiError> {
        let available = self
            .store
            .find_available_device(available_id)
            .await?
            .filter(|ad| ad.owner == owner_id)
            .ok_or_else(|| ApiError::not_found("Available device not found"))?;

        if self.store.is_paired(available_id).await? {
            return Err(ApiError::validation("Device is already paired"));
        }

        Ok(NewDevice {
            name: available.name,
            device_type: available.device_type,
            category: available.category,
            status: available.status,
            paired_from: Some(available.id),
        })
    }

    pub async fn update_device(
        &self,
        device_id: &str,
        updates: UpdateDeviceRequest,
    ) -> Result<Device, ApiError> {
        let mut device = self.get_device_by_id(device_id).await?;

        if let Some(name) = updates.name {
            device.name = name;
        }
        if let Some(device_type) = updates.device_type {
            device.device_type = device_type;
        }
        if let Some(category) = updates.category {
            device.category = category;
        }
        if let Some(status) = updates.status {
            device.status = status;
        }

        if !self.store.save_device(&device).await? {
            return Err(ApiError::not_found("Device not found"));
        }

        Ok(device)
    }

    pub async fn categorize_device(
        &self,
        device_id: &str,
        category: &str,
    ) -> Result<Device, ApiError> {
        if category.is_empty() {
            return Err(ApiError::validation("Device category is required"));
        }

        let mut device = self.get_device_by_id(device_id).await?;
        device.category = category.to_string();

        if !self.store.save_device(&device).await? {
            return Err(ApiError::not_found("Device not found"));
        }

        Ok(device)
    }

    pub async fn get_device_status(&self, device_id: &str) -> Result<DeviceStatusView, ApiError> {
        let device = self.get_device_by_id(device_id).await?;

        Ok(DeviceStatusView {
            status: device.status,
            last_active: OffsetDateTime::now_utc(),
        })
    }

    /// Applies a command as a shallow merge into the device status, so a
    /// command touching only `brightness` never erases `isOn`.
    pub async fn control_device(&self, device_id: &str, command: Value) -> Result<Value, ApiError> {
        let mut device = self.get_device_by_id(device_id).await?;

        merge_status(&mut device.status, &command);

        if !self.store.save_device(&device).await? {
            return Err(ApiError::not_found("Device not found"));
        }

        Ok(device.status)
    }

    pub async fn remove_device(&self, device_id: &str) -> Result<Removed, ApiError> {
        if !self.store.delete_device(device_id).await? {
            return Err(ApiError::not_found("Device not found"));
        }

        Ok(Removed::new(device_id))
    }
}

#[cfg(test)]
mod tests {
    use crate::store::MemStore;

    use super::*;

    #[tokio::test]
    async fn test_control_merges_instead_of_replacing() {
        let service = DeviceService::new(Arc::new(MemStore::seeded()));

        // device-1 starts as { isOn: true, brightness: 80 }
        let status = service
            .control_device("device-1", json!({ "brightness": 50 }))
            .await
            .unwrap();

        assert_eq!(status, json!({ "isOn": true, "brightness": 50 }));
    }

    #[tokio::test]
    async fn test_pairing_flow_hides_available_device() {
        let store: Arc<dyn Store> = Arc::new(MemStore::seeded());
        let service = DeviceService::new(store.clone());

        let device = service
            .add_device_to_room(
                "room-1",
                "user-1",
                AddDeviceRequest {
                    available_device_id: Some("available-device-1".to_string()),
                    name: None,
                    device_type: None,
                    category: None,
                    status: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(device.paired_from.as_deref(), Some("available-device-1"));
        assert_eq!(device.name, "Philips Hue White Smart");

        let available = service
            .get_available_devices_for_user("user-1")
            .await
            .unwrap();
        assert!(available.iter().all(|ad| ad.id != "available-device-1"));
    }

    #[tokio::test]
    async fn test_repairing_is_rejected() {
        let service = DeviceService::new(Arc::new(MemStore::seeded()));
        let request = AddDeviceRequest {
            available_device_id: Some("available-device-2".to_string()),
            name: None,
            device_type: None,
            category: None,
            status: None,
        };

        service
            .add_device_to_room("room-1", "user-1", request.clone())
            .await
            .unwrap();

        let again = service.add_device_to_room("room-2", "user-1", request).await;
        assert!(matches!(again, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_pairing_foreign_available_device_reads_as_missing() {
        let service = DeviceService::new(Arc::new(MemStore::seeded()));

        let result = service
            .add_device_to_room(
                "room-1",
                "user-2",
                AddDeviceRequest {
                    available_device_id: Some("available-device-1".to_string()),
                    name: None,
                    device_type: None,
                    category: None,
                    status: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_merge_status_replaces_non_object_operands() {
        let mut base = json!("OFF");
        merge_status(&mut base, &json!({ "isOn": true }));
        assert_eq!(base, json!({ "isOn": true }));
    }
}
