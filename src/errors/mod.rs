mod api;
mod auth;

pub use api::ApiError;
pub use auth::AuthError;

use std::sync::OnceLock;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;

/// Whether failure envelopes carry the underlying error detail. Set once at
/// startup from the configured environment; defaults to hidden.
static EXPOSE_ERROR_DETAIL: OnceLock<bool> = OnceLock::new();

pub fn expose_error_detail(expose: bool) {
    let _ = EXPOSE_ERROR_DETAIL.set(expose);
}

fn detail_exposed() -> bool {
    *EXPOSE_ERROR_DETAIL.get().unwrap_or(&false)
}

/// Single point turning the error taxonomy into the wire envelope:
/// `{ "success": false, "message": ..., "error": { "detail": ... }? }`.
/// Backend-specific failures (unique-constraint violations, corrupt rows)
/// are normalized here so both storage backends present identically.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ApiError::Auth(e) => (e.status_code(), e.to_string(), None),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message, None),
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Duplicate(message) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Store(err) => match &err {
                StoreError::Database(sqlx::Error::Database(db)) if db.is_unique_violation() => (
                    StatusCode::BAD_REQUEST,
                    "Duplicate field value. Please use another value!".to_string(),
                    Some(db.to_string()),
                ),
                _ => {
                    tracing::error!("store failure: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        Some(err.to_string()),
                    )
                }
            },
            ApiError::Internal(err) => {
                tracing::error!("internal error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(format!("{err:?}")),
                )
            }
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if detail_exposed() {
            if let Some(detail) = detail {
                body["error"] = json!({ "detail": detail });
            }
        }

        (status, Json(body)).into_response()
    }
}
