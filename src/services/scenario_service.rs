use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::{DeviceCommand, Scenario};
use crate::store::{NewScenario, Store};

use super::Removed;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateScenarioRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub actions: Vec<DeviceCommand>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScenarioRequest {
    pub name: Option<String>,
    pub actions: Option<Vec<DeviceCommand>>,
}

/// Owner-scoped scenario CRUD. Creation enforces the two-action minimum;
/// updates replace fields as given.
pub struct ScenarioService {
    store: Arc<dyn Store>,
}

impl ScenarioService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get_scenarios_for_user(&self, owner_id: &str) -> Result<Vec<Scenario>, ApiError> {
        Ok(self.store.scenarios_for_owner(owner_id).await?)
    }

    pub async fn get_scenario_by_id(
        &self,
        scenario_id: &str,
        owner_id: &str,
    ) -> Result<Scenario, ApiError> {
        self.store
            .find_scenario_for_owner(scenario_id, owner_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Scenario not found"))
    }

    pub async fn create_scenario(
        &self,
        owner_id: &str,
        request: CreateScenarioRequest,
    ) -> Result<Scenario, ApiError> {
        let name = match request.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ApiError::validation("Scenario name is required")),
        };

        if request.actions.len() < 2 {
            return Err(ApiError::validation(
                "A scenario requires at least two device actions.",
            ));
        }

        Ok(self
            .store
            .insert_scenario(
                owner_id,
                NewScenario {
                    name,
                    actions: request.actions,
                },
            )
            .await?)
    }

    pub async fn update_scenario(
        &self,
        scenario_id: &str,
        owner_id: &str,
        updates: UpdateScenarioRequest,
    ) -> Result<Scenario, ApiError> {
        let mut scenario = self.get_scenario_by_id(scenario_id, owner_id).await?;

        if let Some(name) = updates.name {
            scenario.name = name;
        }
        if let Some(actions) = updates.actions {
            scenario.actions = actions;
        }

        if !self.store.save_scenario(&scenario).await? {
            return Err(ApiError::not_found("Scenario not found"));
        }

        Ok(scenario)
    }

    pub async fn remove_scenario(
        &self,
        scenario_id: &str,
        owner_id: &str,
    ) -> Result<Removed, ApiError> {
        if !self.store.delete_scenario(scenario_id, owner_id).await? {
            return Err(ApiError::not_found("Scenario not found"));
        }

        Ok(Removed::new(scenario_id))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::store::MemStore;

    use super::*;

    fn action(device_id: &str) -> DeviceCommand {
        DeviceCommand {
            device_id: device_id.to_string(),
            command: json!({ "isOn": true }),
        }
    }

    #[tokio::test]
    async fn test_single_action_scenario_is_rejected() {
        let service = ScenarioService::new(Arc::new(MemStore::seeded()));

        let result = service
            .create_scenario(
                "user-1",
                CreateScenarioRequest {
                    name: Some("Movie night".to_string()),
                    actions: vec![action("device-1")],
                },
            )
            .await;

        match result {
            Err(ApiError::Validation(message)) => {
                assert_eq!(message, "A scenario requires at least two device actions.")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_scenario() {
        let service = ScenarioService::new(Arc::new(MemStore::seeded()));

        let created = service
            .create_scenario(
                "user-1",
                CreateScenarioRequest {
                    name: Some("Movie night".to_string()),
                    actions: vec![action("device-1"), action("device-2")],
                },
            )
            .await
            .unwrap();

        let fetched = service
            .get_scenario_by_id(&created.id, "user-1")
            .await
            .unwrap();
        assert_eq!(fetched.actions.len(), 2);
    }

    #[tokio::test]
    async fn test_update_is_not_revalidated() {
        let service = ScenarioService::new(Arc::new(MemStore::seeded()));

        // scene-1 belongs to user-1; shrinking to one action is allowed on
        // update.
        let updated = service
            .update_scenario(
                "scene-1",
                "user-1",
                UpdateScenarioRequest {
                    name: None,
                    actions: Some(vec![action("device-1")]),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.actions.len(), 1);
    }
}
