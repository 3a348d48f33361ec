use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("You are not logged in. Please log in to get access.")]
    NoSession,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("Your token has expired.")]
    TokenExpired,

    #[error("The user belonging to this token no longer exists.")]
    UserGone,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailExists,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NoSession => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::UserGone => StatusCode::UNAUTHORIZED,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::EmailExists => StatusCode::BAD_REQUEST,
        }
    }
}
