use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::{Method, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

use homelink::services::TokenClaims;

use crate::common::mock_app::MockApp;

mod common;

#[tokio::test]
async fn test_register_then_me_round_trip() {
    let app = MockApp::mem();

    let (token, user_id) = app.register_user("fresh@test.com").await;

    let (status, body) = app
        .request(Method::GET, "/api/v1/auth/me", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("User data retrieved successfully"));
    assert_eq!(body["data"]["id"], json!(user_id));
    // Password hashes never serialize.
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_login_demo_user_on_mem_backend() {
    let app = MockApp::mem();

    let token = app.login_demo_user().await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_read_the_same() {
    let app = MockApp::mem();

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "user@example.com", "password": "nope" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Invalid email or password"));

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": "nope" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Invalid email or password"));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = MockApp::mem();

    app.register_user("dup@test.com").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({
                "name": "Again",
                "email": "dup@test.com",
                "password": "secret123",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Email already registered"));
}

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let app = MockApp::mem();

    let (status, body) = app
        .request(Method::GET, "/api/v1/houses", None, None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        json!("You are not logged in. Please log in to get access.")
    );
}

#[tokio::test]
async fn test_malformed_token_is_unauthorized() {
    let app = MockApp::mem();

    let (status, body) = app
        .request(Method::GET, "/api/v1/houses", Some("bad_token"), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Invalid token."));
}

#[tokio::test]
async fn test_expired_token_is_reported_as_expired() {
    let app = MockApp::mem();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = TokenClaims {
        sub: String::from("user-1"),
        email: String::from("user@example.com"),
        iat: now - 2000,
        exp: now - 1000,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret("test".as_ref()),
    )
    .unwrap();

    let (status, body) = app
        .request(Method::GET, "/api/v1/houses", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Your token has expired."));
}

#[tokio::test]
async fn test_token_for_deleted_user_is_rejected() {
    let app = MockApp::mem();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = TokenClaims {
        sub: String::from("user-ghost"),
        email: String::from("ghost@example.com"),
        iat: now,
        exp: now + 1000,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret("test".as_ref()),
    )
    .unwrap();

    let (status, body) = app
        .request(Method::GET, "/api/v1/houses", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        json!("The user belonging to this token no longer exists.")
    );
}

#[tokio::test]
async fn test_register_and_login_on_sql_backend() {
    let app = MockApp::sql().await;

    app.register_user("sql@test.com").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "sql@test.com", "password": "secret123" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Login successful"));
    assert!(body["data"]["token"].as_str().is_some());
}
