use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::middlewares::CurrentUser;
use crate::services::{
    AddDeviceRequest, DeviceService, LightingRequest, RoomService, UpdateRoomRequest,
};

use super::ApiResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureBody {
    pub temperature: f64,
}

#[derive(Clone)]
pub struct RoomState {
    pub room_service: Arc<RoomService>,
    pub device_service: Arc<DeviceService>,
}

pub async fn get_room(
    Path(room_id): Path<String>,
    State(state): State<RoomState>,
) -> Result<impl IntoResponse, ApiError> {
    let room = state.room_service.get_room_by_id(&room_id).await?;

    Ok(ApiResponse::ok("Room fetched successfully", room))
}

pub async fn update_room(
    Path(room_id): Path<String>,
    State(state): State<RoomState>,
    Json(body): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let room = state.room_service.update_room(&room_id, body).await?;

    Ok(ApiResponse::ok("Room updated successfully", room))
}

pub async fn remove_room(
    Path(room_id): Path<String>,
    State(state): State<RoomState>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state.room_service.remove_room(&room_id).await?;

    Ok(ApiResponse::ok("Room removed successfully", removed))
}

pub async fn set_room_temperature(
    Path(room_id): Path<String>,
    State(state): State<RoomState>,
    Json(body): Json<TemperatureBody>,
) -> Result<impl IntoResponse, ApiError> {
    let settings = state
        .room_service
        .set_room_temperature(&room_id, body.temperature)
        .await?;

    Ok(ApiResponse::ok("Temperature set", settings))
}

pub async fn control_room_lighting(
    Path(room_id): Path<String>,
    State(state): State<RoomState>,
    Json(body): Json<LightingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let settings = state
        .room_service
        .control_room_lighting(&room_id, body.lighting)
        .await?;

    Ok(ApiResponse::ok("Lighting set", settings))
}

pub async fn get_devices(
    Path(room_id): Path<String>,
    State(state): State<RoomState>,
) -> Result<impl IntoResponse, ApiError> {
    let devices = state.device_service.get_devices_in_room(&room_id).await?;

    Ok(ApiResponse::ok("Devices fetched successfully", devices))
}

pub async fn add_device_to_room(
    Path(room_id): Path<String>,
    State(state): State<RoomState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<AddDeviceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let device = state
        .device_service
        .add_device_to_room(&room_id, &current.id, body)
        .await?;

    Ok(ApiResponse::created("Device added", device))
}
