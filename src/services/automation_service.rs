use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::{Automation, DeviceCommand, Trigger};
use crate::store::{NewAutomation, Store};

use super::Removed;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutomationRequest {
    pub name: Option<String>,
    pub trigger: Option<Trigger>,
    pub action: Option<DeviceCommand>,
    pub is_enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAutomationRequest {
    pub name: Option<String>,
    pub trigger: Option<Trigger>,
    pub action: Option<DeviceCommand>,
    pub is_enabled: Option<bool>,
}

/// Automations are owner-scoped end to end: listing, lookup, update and
/// removal all take the caller's id from the session.
pub struct AutomationService {
    store: Arc<dyn Store>,
}

impl AutomationService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get_automations_for_user(
        &self,
        owner_id: &str,
    ) -> Result<Vec<Automation>, ApiError> {
        Ok(self.store.automations_for_owner(owner_id).await?)
    }

    pub async fn get_automation_by_id(
        &self,
        automation_id: &str,
        owner_id: &str,
    ) -> Result<Automation, ApiError> {
        self.store
            .find_automation_for_owner(automation_id, owner_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Automation not found"))
    }

    pub async fn create_automation(
        &self,
        owner_id: &str,
        request: CreateAutomationRequest,
    ) -> Result<Automation, ApiError> {
        let (name, trigger, action) = match (request.name, request.trigger, request.action) {
            (Some(name), Some(trigger), Some(action)) if !name.is_empty() => {
                (name, trigger, action)
            }
            _ => return Err(ApiError::validation("Please complete all fields")),
        };

        Ok(self
            .store
            .insert_automation(
                owner_id,
                NewAutomation {
                    name,
                    trigger,
                    action,
                    is_enabled: request.is_enabled.unwrap_or(true),
                },
            )
            .await?)
    }

    pub async fn update_automation(
        &self,
        automation_id: &str,
        owner_id: &str,
        updates: UpdateAutomationRequest,
    ) -> Result<Automation, ApiError> {
        let mut automation = self.get_automation_by_id(automation_id, owner_id).await?;

        if let Some(name) = updates.name {
            automation.name = name;
        }
        if let Some(trigger) = updates.trigger {
            automation.trigger = trigger;
        }
        if let Some(action) = updates.action {
            automation.action = action;
        }
        if let Some(is_enabled) = updates.is_enabled {
            automation.is_enabled = is_enabled;
        }

        if !self.store.save_automation(&automation).await? {
            return Err(ApiError::not_found("Automation not found"));
        }

        Ok(automation)
    }

    pub async fn remove_automation(
        &self,
        automation_id: &str,
        owner_id: &str,
    ) -> Result<Removed, ApiError> {
        if !self.store.delete_automation(automation_id, owner_id).await? {
            return Err(ApiError::not_found("Automation not found"));
        }

        Ok(Removed::new(automation_id))
    }
}
