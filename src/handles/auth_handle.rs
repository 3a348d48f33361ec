use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, State};
use axum::response::IntoResponse;

use crate::errors::ApiError;
use crate::middlewares::CurrentUser;
use crate::services::{LoginRequest, RegisterRequest, UserService};

use super::ApiResponse;

#[derive(Clone)]
pub struct AuthState {
    pub user_service: Arc<UserService>,
}

pub async fn register(
    State(state): State<AuthState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = state.user_service.register_user(body).await?;

    Ok(ApiResponse::created("User registered successfully", payload))
}

pub async fn login(
    State(state): State<AuthState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = state.user_service.login_user(body).await?;

    Ok(ApiResponse::ok("Login successful", payload))
}

pub async fn get_me(
    State(state): State<AuthState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_service.get_user_by_id(&current.id).await?;

    Ok(ApiResponse::ok("User data retrieved successfully", user))
}
