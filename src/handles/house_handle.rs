use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::middlewares::CurrentUser;
use crate::services::{HouseService, RoomService, UpdateHouseRequest};

use super::ApiResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct HouseBody {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomBody {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone)]
pub struct HouseState {
    pub house_service: Arc<HouseService>,
    pub room_service: Arc<RoomService>,
}

pub async fn get_houses(
    State(state): State<HouseState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let houses = state.house_service.get_houses_for_user(&current.id).await?;

    Ok(ApiResponse::ok("Houses fetched successfully", houses))
}

pub async fn add_house(
    State(state): State<HouseState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<HouseBody>,
) -> Result<impl IntoResponse, ApiError> {
    let house = state.house_service.add_house(&current.id, &body.name).await?;

    Ok(ApiResponse::created("House added successfully", house))
}

pub async fn get_house(
    Path(house_id): Path<String>,
    State(state): State<HouseState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let house = state
        .house_service
        .get_house_by_id(&house_id, &current.id)
        .await?;

    Ok(ApiResponse::ok("House fetched successfully", house))
}

pub async fn update_house(
    Path(house_id): Path<String>,
    State(state): State<HouseState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<UpdateHouseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let house = state
        .house_service
        .update_house(&house_id, &current.id, body)
        .await?;

    Ok(ApiResponse::ok("House updated successfully", house))
}

pub async fn remove_house(
    Path(house_id): Path<String>,
    State(state): State<HouseState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .house_service
        .remove_house(&house_id, &current.id)
        .await?;

    Ok(ApiResponse::ok("House removed successfully", removed))
}

pub async fn get_rooms(
    Path(house_id): Path<String>,
    State(state): State<HouseState>,
) -> Result<impl IntoResponse, ApiError> {
    let rooms = state.room_service.get_rooms_in_house(&house_id).await?;

    Ok(ApiResponse::ok("Rooms fetched successfully", rooms))
}

pub async fn add_room_to_house(
    Path(house_id): Path<String>,
    State(state): State<HouseState>,
    Json(body): Json<RoomBody>,
) -> Result<impl IntoResponse, ApiError> {
    let room = state
        .room_service
        .add_room_to_house(&house_id, &body.name)
        .await?;

    Ok(ApiResponse::created("Room added successfully", room))
}
