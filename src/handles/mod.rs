mod auth_handle;
mod automation_handle;
mod device_handle;
mod house_handle;
mod room_handle;
mod scenario_handle;
mod security_handle;

pub use auth_handle::*;
pub use automation_handle::*;
pub use device_handle::*;
pub use house_handle::*;
pub use room_handle::*;
pub use scenario_handle::*;
pub use security_handle::*;

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Success envelope shared by every endpoint:
/// `{ "success": true, "message": ..., "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: &str, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        })
    }

    pub fn created(message: &str, data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::CREATED,
            Json(Self {
                success: true,
                message: message.to_string(),
                data: Some(data),
            }),
        )
    }
}
