//! Integration tests for registration and login.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_register_then_login() {
    let app = helpers::TestApp::new().await;

    let response = app.register("neo", "password123").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!(true));

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "neo",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["token_type"], "bearer");
    assert!(response.body["user_id"].as_i64().is_some());
}

#[tokio::test]
async fn test_register_existing_username_returns_false() {
    let app = helpers::TestApp::new().await;
    app.register("neo", "password123").await;

    let response = app.register("neo", "another").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!(false));
}

#[tokio::test]
async fn test_register_accepts_hashed_password_field() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/register/",
            Some(serde_json::json!({
                "username": "trinity",
                "hashedPassword": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.body, serde_json::json!(true));

    app.login("trinity", "password123").await;
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.register("neo", "password123").await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "neo",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/movies/names", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/movies/names", None, Some("not-a-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
