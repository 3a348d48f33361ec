use std::sync::Arc;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::errors::{ApiError, AuthError};
use crate::models::User;
use crate::store::{NewUser, Store};

use super::auth_service::AuthService;
use super::token_service::TokenService;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued at login and registration. The user carries no password field on
/// the wire.
#[derive(Debug, Clone, Serialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// Account lifecycle and identity lookup, backend-agnostic through the
/// injected store.
pub struct UserService {
    store: Arc<dyn Store>,
    auth_service: Arc<AuthService>,
    token_service: Arc<TokenService>,
}

impl UserService {
    pub fn new(
        store: Arc<dyn Store>,
        auth_service: Arc<AuthService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            auth_service,
            token_service,
        }
    }

    pub async fn register_user(&self, request: RegisterRequest) -> Result<AuthPayload, ApiError> {
        if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
            return Err(ApiError::validation("Please provide name, email and password"));
        }

        if self
            .store
            .find_user_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailExists.into());
        }

        let hash = self
            .auth_service
            .hash(&request.password)
            .map_err(|e| anyhow!("Failed to hash password: {e}"))?;

        let user = self
            .store
            .insert_user(NewUser {
                name: request.name,
                email: request.email,
                password: hash,
            })
            .await?;

        let token = self
            .token_service
            .generate_token(&user)
            .map_err(|e| anyhow!("Failed to generate token: {e}"))?
            .token;

        Ok(AuthPayload { token, user })
    }

    pub async fn login_user(&self, request: LoginRequest) -> Result<AuthPayload, ApiError> {
        let user = self
            .store
            .find_user_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let verified = self
            .auth_service
            .verify(&user.password, &request.password)
            .map_err(|e| anyhow!("Failed to verify password: {e}"))?;
        if !verified {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self
            .token_service
            .generate_token(&user)
            .map_err(|e| anyhow!("Failed to generate token: {e}"))?
            .token;

        Ok(AuthPayload { token, user })
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<User, ApiError> {
        self.store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("User not found"))
    }
}
