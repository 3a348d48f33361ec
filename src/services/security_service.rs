use std::sync::Arc;

use serde_json::Value;

use crate::errors::ApiError;
use crate::models::{Device, DeviceType};
use crate::store::Store;

use super::device_service::merge_status;

/// Security devices are ordinary devices narrowed by type. A device of any
/// other type is reported as missing, not as a type error.
pub struct SecurityService {
    store: Arc<dyn Store>,
}

impl SecurityService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get_security_device(&self, device_id: &str) -> Result<Device, ApiError> {
        self.store
            .find_device(device_id)
            .await?
            .filter(|device| device.device_type == DeviceType::Security)
            .ok_or_else(|| ApiError::not_found("Security device not found"))
    }

    pub async fn control_security_device(
        &self,
        device_id: &str,
        command: Value,
    ) -> Result<Value, ApiError> {
        let mut device = self.get_security_device(device_id).await?;

        merge_status(&mut device.status, &command);

        if !self.store.save_device(&device).await? {
            return Err(ApiError::not_found("Security device not found"));
        }

        tracing::info!(device = %device.id, "security command applied");

        Ok(device.status)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::store::MemStore;

    use super::*;

    #[tokio::test]
    async fn test_non_security_device_reads_as_missing() {
        let service = SecurityService::new(Arc::new(MemStore::seeded()));

        // device-1 is a light
        let result = service.get_security_device("device-1").await;

        match result {
            Err(ApiError::NotFound(message)) => {
                assert_eq!(message, "Security device not found")
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_arming_merges_into_status() {
        let service = SecurityService::new(Arc::new(MemStore::seeded()));

        // device-4 is the seeded security camera
        let status = service
            .control_security_device("device-4", json!({ "armed": true }))
            .await
            .unwrap();

        assert_eq!(status["armed"], json!(true));
        assert!(status.get("isOn").is_some());
    }
}
