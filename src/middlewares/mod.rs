mod auth_middleware;

pub use auth_middleware::{CurrentUser, TokenState, auth};
