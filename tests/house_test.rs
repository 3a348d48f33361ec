use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::mock_app::MockApp;

mod common;

#[tokio::test]
async fn test_house_lifecycle_on_both_backends() {
    for app in [MockApp::mem(), MockApp::sql().await] {
        let (token, _) = app.register_user("owner@test.com").await;

        let (status, body) = app
            .request(
                Method::POST,
                "/api/v1/houses",
                Some(&token),
                Some(json!({ "name": "Lake House" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], json!("House added successfully"));
        let house_id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = app
            .request(Method::GET, "/api/v1/houses", Some(&token), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let houses = body["data"].as_array().unwrap();
        assert!(houses.iter().any(|h| h["id"] == json!(house_id)));

        let (status, body) = app
            .request(
                Method::PUT,
                &format!("/api/v1/houses/{house_id}"),
                Some(&token),
                Some(json!({ "name": "Lake House Renamed" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], json!("Lake House Renamed"));

        let (status, body) = app
            .request(
                Method::DELETE,
                &format!("/api/v1/houses/{house_id}"),
                Some(&token),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], json!("removed"));

        // Second removal must read as missing.
        let (status, body) = app
            .request(
                Method::DELETE,
                &format!("/api/v1/houses/{house_id}"),
                Some(&token),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["message"],
            json!("House not found or you are not the owner")
        );
    }
}

#[tokio::test]
async fn test_houses_are_isolated_between_users() {
    let app = MockApp::mem();

    let (token_a, _) = app.register_user("a@test.com").await;
    let (token_b, _) = app.register_user("b@test.com").await;

    let (_, body) = app
        .request(
            Method::POST,
            "/api/v1/houses",
            Some(&token_a),
            Some(json!({ "name": "A's Place" })),
        )
        .await;
    let house_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(
            Method::GET,
            &format!("/api/v1/houses/{house_id}"),
            Some(&token_b),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        json!("House not found or you do not have access")
    );

    let (status, body) = app
        .request(Method::GET, "/api/v1/houses", Some(&token_b), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_empty_house_name_is_rejected() {
    let app = MockApp::mem();
    let (token, _) = app.register_user("empty@test.com").await;

    let (status, body) = app
        .request(Method::POST, "/api/v1/houses", Some(&token), Some(json!({})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("House name is required"));
}

#[tokio::test]
async fn test_house_removal_cascades_to_rooms() {
    let app = MockApp::mem();
    let token = app.login_demo_user().await;

    let (status, _) = app
        .request(Method::DELETE, "/api/v1/houses/house-1", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request(Method::GET, "/api/v1/rooms/room-1", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Room not found"));

    let (status, body) = app
        .request(Method::GET, "/api/v1/devices/device-1", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Device not found"));
}
