use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ApiError;
use crate::middlewares::CurrentUser;
use crate::services::{DeviceService, UpdateDeviceRequest};

use super::ApiResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryBody {
    #[serde(default)]
    pub category: String,
}

#[derive(Clone)]
pub struct DeviceState {
    pub device_service: Arc<DeviceService>,
}

pub async fn get_available_devices(
    State(state): State<DeviceState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let devices = state
        .device_service
        .get_available_devices_for_user(&current.id)
        .await?;

    Ok(ApiResponse::ok("Available devices fetched successfully", devices))
}

pub async fn get_device(
    Path(device_id): Path<String>,
    State(state): State<DeviceState>,
) -> Result<impl IntoResponse, ApiError> {
    let device = state.device_service.get_device_by_id(&device_id).await?;

    Ok(ApiResponse::ok("Device fetched successfully", device))
}

pub async fn update_device(
    Path(device_id): Path<String>,
    State(state): State<DeviceState>,
    Json(body): Json<UpdateDeviceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let device = state.device_service.update_device(&device_id, body).await?;

    Ok(ApiResponse::ok("Device updated", device))
}

pub async fn categorize_device(
    Path(device_id): Path<String>,
    State(state): State<DeviceState>,
    Json(body): Json<CategoryBody>,
) -> Result<impl IntoResponse, ApiError> {
    let device = state
        .device_service
        .categorize_device(&device_id, &body.category)
        .await?;

    Ok(ApiResponse::ok("Device updated", device))
}

pub async fn get_device_status(
    Path(device_id): Path<String>,
    State(state): State<DeviceState>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state.device_service.get_device_status(&device_id).await?;

    Ok(ApiResponse::ok("Status retrieved", status))
}

pub async fn control_device(
    Path(device_id): Path<String>,
    State(state): State<DeviceState>,
    Json(command): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state
        .device_service
        .control_device(&device_id, command)
        .await?;

    Ok(ApiResponse::ok("Action performed", status))
}

pub async fn remove_device(
    Path(device_id): Path<String>,
    State(state): State<DeviceState>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state.device_service.remove_device(&device_id).await?;

    Ok(ApiResponse::ok("Device removed", removed))
}
