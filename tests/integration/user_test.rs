//! Integration tests for user administration.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_non_admin_listing_requires_admin() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;

    let response = app
        .request("GET", "/users/nonAdmin", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Admin privileges required");
}

#[tokio::test]
async fn test_non_admin_listing_excludes_admin() {
    let app = helpers::TestApp::new().await;
    app.register("neo", "password123").await;
    app.register("trinity", "password123").await;
    let admin = app.user_token("admin").await;

    let mut owned = helpers::movie_json("Owned");
    owned["editorId"] = serde_json::json!(1);
    app.request("POST", "/movies/bulk", Some(serde_json::json!([owned])), None)
        .await;

    let response = app
        .request("GET", "/users/nonAdmin", None, Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().expect("list");
    let names: Vec<&str> = users.iter().filter_map(|u| u["username"].as_str()).collect();
    assert_eq!(names, vec!["neo", "trinity"]);
    assert!(users.iter().all(|u| u.get("hashedPassword").is_none()));
    assert_eq!(users[0]["nrMovies"], 1);
    assert_eq!(users[1]["nrMovies"], 0);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;

    let listed = app
        .request("GET", "/users/userId/1", None, Some(&token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["username"], "neo");
    assert_eq!(listed.body["nrMovies"], 0);

    let missing = app
        .request("GET", "/users/userId/42", None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_deletes_user() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    let admin = app.user_token("admin").await;

    let forbidden = app.request("DELETE", "/users/1", None, Some(&token)).await;
    assert_eq!(forbidden.status, StatusCode::UNAUTHORIZED);

    let deleted = app.request("DELETE", "/users/1", None, Some(&admin)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "User deleted successfully");

    let again = app.request("DELETE", "/users/1", None, Some(&admin)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
