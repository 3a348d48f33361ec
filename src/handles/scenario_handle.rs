use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::response::IntoResponse;

use crate::errors::ApiError;
use crate::middlewares::CurrentUser;
use crate::services::{CreateScenarioRequest, ScenarioService, UpdateScenarioRequest};

use super::ApiResponse;

#[derive(Clone)]
pub struct ScenarioState {
    pub scenario_service: Arc<ScenarioService>,
}

pub async fn get_scenarios(
    State(state): State<ScenarioState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let scenarios = state
        .scenario_service
        .get_scenarios_for_user(&current.id)
        .await?;

    Ok(ApiResponse::ok("Scenarios fetched successfully", scenarios))
}

pub async fn get_scenario(
    Path(scenario_id): Path<String>,
    State(state): State<ScenarioState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let scenario = state
        .scenario_service
        .get_scenario_by_id(&scenario_id, &current.id)
        .await?;

    Ok(ApiResponse::ok("Scenario fetched successfully", scenario))
}

pub async fn create_scenario(
    State(state): State<ScenarioState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<CreateScenarioRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let scenario = state
        .scenario_service
        .create_scenario(&current.id, body)
        .await?;

    Ok(ApiResponse::created("Scenario created", scenario))
}

pub async fn update_scenario(
    Path(scenario_id): Path<String>,
    State(state): State<ScenarioState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<UpdateScenarioRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let scenario = state
        .scenario_service
        .update_scenario(&scenario_id, &current.id, body)
        .await?;

    Ok(ApiResponse::ok("Scenario updated successfully", scenario))
}

pub async fn delete_scenario(
    Path(scenario_id): Path<String>,
    State(state): State<ScenarioState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .scenario_service
        .remove_scenario(&scenario_id, &current.id)
        .await?;

    Ok(ApiResponse::ok("Scenario deleted successfully", removed))
}
