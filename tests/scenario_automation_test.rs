use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::mock_app::MockApp;

mod common;

#[tokio::test]
async fn test_scenario_requires_two_actions_on_both_backends() {
    for app in [MockApp::mem(), MockApp::sql().await] {
        let (token, _) = app.register_user("scenes@test.com").await;

        let (status, body) = app
            .request(
                Method::POST,
                "/api/v1/scenarios",
                Some(&token),
                Some(json!({
                    "name": "Half a scene",
                    "actions": [
                        { "deviceId": "device-1", "command": { "isOn": true } }
                    ],
                })),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            json!("A scenario requires at least two device actions.")
        );

        // Nothing was persisted.
        let (_, body) = app
            .request(Method::GET, "/api/v1/scenarios", Some(&token), None)
            .await;
        assert_eq!(body["data"], json!([]));
    }
}

#[tokio::test]
async fn test_scenario_lifecycle() {
    let app = MockApp::mem();
    let (token, _) = app.register_user("scene-crud@test.com").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/scenarios",
            Some(&token),
            Some(json!({
                "name": "Movie Night",
                "actions": [
                    { "deviceId": "device-1", "command": { "isOn": false } },
                    { "deviceId": "device-2", "command": { "temperature": 20 } }
                ],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], json!("Scenario created"));
    let scenario_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/v1/scenarios/{scenario_id}"),
            Some(&token),
            Some(json!({ "name": "Cinema Night" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Cinema Night"));
    assert_eq!(body["data"]["actions"].as_array().unwrap().len(), 2);

    let (status, body) = app
        .request(
            Method::DELETE,
            &format!("/api/v1/scenarios/{scenario_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Scenario deleted successfully"));
}

#[tokio::test]
async fn test_scenarios_are_owner_scoped() {
    let app = MockApp::mem();
    let (token, _) = app.register_user("not-owner@test.com").await;

    // scene-1 belongs to the seeded demo user.
    let (status, body) = app
        .request(Method::GET, "/api/v1/scenarios/scene-1", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Scenario not found"));
}

#[tokio::test]
async fn test_automation_requires_all_fields() {
    let app = MockApp::mem();
    let token = app.login_demo_user().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/automations",
            Some(&token),
            Some(json!({ "name": "No trigger" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Please complete all fields"));
}

#[tokio::test]
async fn test_automation_lifecycle_on_both_backends() {
    for app in [MockApp::mem(), MockApp::sql().await] {
        let (token, _) = app.register_user("autos@test.com").await;

        let (status, body) = app
            .request(
                Method::POST,
                "/api/v1/automations",
                Some(&token),
                Some(json!({
                    "name": "Sunset lights",
                    "trigger": { "type": "time", "value": "8:00 PM Daily" },
                    "action": { "deviceId": "device-1", "command": { "isOn": true } },
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], json!("Automation created successfully"));
        assert_eq!(body["data"]["isEnabled"], json!(true));
        let automation_id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = app
            .request(
                Method::PUT,
                &format!("/api/v1/automations/{automation_id}"),
                Some(&token),
                Some(json!({ "isEnabled": false })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["isEnabled"], json!(false));
        // Untouched fields survive.
        assert_eq!(body["data"]["trigger"]["type"], json!("time"));

        let (status, body) = app
            .request(
                Method::DELETE,
                &format!("/api/v1/automations/{automation_id}"),
                Some(&token),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], json!("removed"));

        let (status, _) = app
            .request(
                Method::GET,
                &format!("/api/v1/automations/{automation_id}"),
                Some(&token),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_automations_are_owner_scoped() {
    let app = MockApp::mem();
    let (token, _) = app.register_user("auto-outsider@test.com").await;

    let (status, body) = app
        .request(Method::GET, "/api/v1/automations/auto-1", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Automation not found"));

    let (_, body) = app
        .request(Method::GET, "/api/v1/automations", Some(&token), None)
        .await;
    assert_eq!(body["data"], json!([]));
}
