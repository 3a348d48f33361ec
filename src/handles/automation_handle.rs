use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::response::IntoResponse;

use crate::errors::ApiError;
use crate::middlewares::CurrentUser;
use crate::services::{AutomationService, CreateAutomationRequest, UpdateAutomationRequest};

use super::ApiResponse;

#[derive(Clone)]
pub struct AutomationState {
    pub automation_service: Arc<AutomationService>,
}

pub async fn get_automations(
    State(state): State<AutomationState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let automations = state
        .automation_service
        .get_automations_for_user(&current.id)
        .await?;

    Ok(ApiResponse::ok("Automations fetched successfully", automations))
}

pub async fn get_automation(
    Path(automation_id): Path<String>,
    State(state): State<AutomationState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let automation = state
        .automation_service
        .get_automation_by_id(&automation_id, &current.id)
        .await?;

    Ok(ApiResponse::ok("Automation fetched successfully", automation))
}

pub async fn create_automation(
    State(state): State<AutomationState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<CreateAutomationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let automation = state
        .automation_service
        .create_automation(&current.id, body)
        .await?;

    Ok(ApiResponse::created("Automation created successfully", automation))
}

pub async fn update_automation(
    Path(automation_id): Path<String>,
    State(state): State<AutomationState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<UpdateAutomationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let automation = state
        .automation_service
        .update_automation(&automation_id, &current.id, body)
        .await?;

    Ok(ApiResponse::ok("Automation updated successfully", automation))
}

pub async fn delete_automation(
    Path(automation_id): Path<String>,
    State(state): State<AutomationState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .automation_service
        .remove_automation(&automation_id, &current.id)
        .await?;

    Ok(ApiResponse::ok("Automation deleted successfully", removed))
}
