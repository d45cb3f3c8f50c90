mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{Factory, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;
    let unique_id = Uuid::new_v4();

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Test Employee",
            "username": format!("user-{}", unique_id),
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body["employee_id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let auth = factory.create_employee().await;

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Another Employee",
            "username": auth.username,
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_missing_name() {
    let app = TestApp::new().await;
    let unique_id = Uuid::new_v4();

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "name": "",
            "username": format!("user-{}", unique_id),
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::new().await;
    let unique_id = Uuid::new_v4();

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Test Employee",
            "username": format!("user-{}", unique_id),
            "password": "abc"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("at least 6 characters"));
}

#[tokio::test]
async fn test_register_defaults_role_and_status() {
    let app = TestApp::new().await;
    let unique_id = Uuid::new_v4();
    let username = format!("user-{}", unique_id);

    app.server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Test Employee",
            "username": &username,
            "password": "password123"
        }))
        .await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "username": &username,
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["employee"]["role"].as_str().unwrap(), "Employee");
    assert_eq!(body["employee"]["status"].as_str().unwrap(), "Active");
    assert!(body["employee"]["profile_image"].is_null());
}

#[tokio::test]
async fn test_login_success_returns_reduced_projection() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let auth = factory.create_employee().await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "username": auth.username,
            "password": TEST_PASSWORD
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["employee"]["username"].as_str().unwrap(), auth.username);
    // the password never crosses the boundary, in any spelling
    assert!(body["employee"].get("password").is_none());
    assert!(body["employee"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_unknown_username() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "username": format!("missing-{}", Uuid::new_v4()),
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let auth = factory.create_employee().await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "username": auth.username,
            "password": "wrongpassword"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejections_are_indistinguishable() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);

    let auth = factory.create_employee().await;

    let unknown = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "username": format!("missing-{}", Uuid::new_v4()),
            "password": "password123"
        }))
        .await;
    let bad_password = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "username": auth.username,
            "password": "wrongpassword"
        }))
        .await;

    unknown.assert_status(StatusCode::UNAUTHORIZED);
    bad_password.assert_status(StatusCode::UNAUTHORIZED);

    let unknown_body: serde_json::Value = unknown.json();
    let bad_password_body: serde_json::Value = bad_password.json();
    assert_eq!(unknown_body, bad_password_body);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/employees").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_rejects_invalid_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/api/employees")
        .add_header("Authorization", "Bearer invalid-token")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
