use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use homelink::app::create_app_with_store;
use homelink::configs::{Auth, SchemaManager};
use homelink::services::TokenService;
use homelink::store::{MemStore, SqlStore, Store};

pub struct MockApp {
    pub router: Router,
    pub store: Arc<dyn Store>,
    pub token_service: Arc<TokenService>,
}

impl MockApp {
    fn auth() -> Auth {
        Auth {
            secret: String::from("test"),
            expiration: 1000,
        }
    }

    /// Router over the seeded in-memory backend.
    pub fn mem() -> Self {
        Self::with_store(Arc::new(MemStore::seeded()))
    }

    /// Router over a fresh in-memory SQLite database.
    pub async fn sql() -> Self {
        let store = SqlStore::connect("sqlite::memory:", SchemaManager::default(), true)
            .await
            .unwrap();

        Self::with_store(Arc::new(store))
    }

    pub fn with_store(store: Arc<dyn Store>) -> Self {
        let router = create_app_with_store(store.clone(), Self::auth());
        let token_service = Arc::new(TokenService::new(Self::auth()));

        Self {
            router,
            store,
            token_service,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    /// Registers a fresh account and returns its token and user id.
    pub async fn register_user(&self, email: &str) -> (String, String) {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/v1/auth/register",
                None,
                Some(json!({
                    "name": "Test User",
                    "email": email,
                    "password": "secret123",
                })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);

        let token = body["data"]["token"].as_str().unwrap().to_string();
        let user_id = body["data"]["user"]["id"].as_str().unwrap().to_string();

        (token, user_id)
    }

    /// Logs in as the seeded demo user. Only meaningful on the mem backend.
    pub async fn login_demo_user(&self) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(json!({
                    "email": "user@example.com",
                    "password": "password123",
                })),
            )
            .await;

        assert_eq!(status, StatusCode::OK);

        body["data"]["token"].as_str().unwrap().to_string()
    }
}
