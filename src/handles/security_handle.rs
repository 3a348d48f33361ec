use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde_json::Value;

use crate::errors::ApiError;
use crate::services::SecurityService;

use super::ApiResponse;

#[derive(Clone)]
pub struct SecurityState {
    pub security_service: Arc<SecurityService>,
}

pub async fn control_security_system(
    Path(device_id): Path<String>,
    State(state): State<SecurityState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state
        .security_service
        .control_security_device(&device_id, body)
        .await?;

    Ok(ApiResponse::ok("Security system updated", status))
}
