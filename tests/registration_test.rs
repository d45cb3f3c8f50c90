mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::json;
use uuid::Uuid;

use common::{Factory, TestApp};

async fn register_account(app: &TestApp) -> (i32, String) {
    let unique_id = Uuid::new_v4();
    let username = format!("user-{}", unique_id);

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Grace Field",
            "username": &username,
            "password": "password123",
            "created_by": "Self"
        }))
        .await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    (body["employee_id"].as_i64().unwrap() as i32, username)
}

#[tokio::test]
async fn test_registration_then_image_upload() {
    let app = TestApp::new().await;
    let (employee_id, username) = register_account(&app).await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![0x89, 0x50, 0x4e, 0x47])
            .file_name("avatar.png")
            .mime_type("image/png"),
    );

    let response = app
        .server
        .post(&format!("/api/employees/{}/image", employee_id))
        .multipart(form)
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let stored_path = body["profile_image"].as_str().unwrap().to_string();
    assert!(stored_path.ends_with(".png"));

    // the stored reference comes back on login
    let login: serde_json::Value = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "username": &username,
            "password": "password123"
        }))
        .await
        .json();
    assert_eq!(
        login["employee"]["profile_image"].as_str().unwrap(),
        stored_path
    );
}

#[tokio::test]
async fn test_failed_image_upload_leaves_account_intact() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let (employee_id, username) = register_account(&app).await;

    // upload without a file field fails the second step only
    let form = MultipartForm::new().add_text("note", "no file here");

    let response = app
        .server
        .post(&format!("/api/employees/{}/image", employee_id))
        .multipart(form)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    // step one stands: the account is retrievable and has no image
    let admin = factory.create_admin().await;
    let employee: serde_json::Value = app
        .server
        .get(&format!("/api/employees/{}", employee_id))
        .add_header("Authorization", admin.auth_header())
        .await
        .json();

    assert_eq!(employee["username"].as_str().unwrap(), username);
    assert!(employee["profile_image"].is_null());
}

#[tokio::test]
async fn test_empty_image_upload_rejected() {
    let app = TestApp::new().await;
    let (employee_id, _) = register_account(&app).await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(Vec::<u8>::new())
            .file_name("empty.png")
            .mime_type("image/png"),
    );

    let response = app
        .server
        .post(&format!("/api/employees/{}/image", employee_id))
        .multipart(form)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_image_upload_unknown_employee() {
    let app = TestApp::new().await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![1, 2, 3])
            .file_name("avatar.jpg")
            .mime_type("image/jpeg"),
    );

    let response = app
        .server
        .post("/api/employees/999999999/image")
        .multipart(form)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
