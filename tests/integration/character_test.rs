//! Integration tests for the character endpoints.

mod helpers;

use axum::http::StatusCode;

use helpers::{character_json, movie_json};

#[tokio::test]
async fn test_character_routes_require_token() {
    let app = helpers::TestApp::new().await;

    let list = app.request("GET", "/characters", None, None).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);

    let create = app
        .request("POST", "/characters", Some(character_json("Neo", "Matrix")), None)
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);

    let count = app.request("GET", "/characters/count", None, None).await;
    assert_eq!(count.status, StatusCode::OK);
    assert_eq!(count.body["count"], 0);
}

#[tokio::test]
async fn test_create_recomputes_movie_counts() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    app.request("POST", "/movies", Some(movie_json("Matrix")), Some(&token))
        .await;

    let created = app
        .request(
            "POST",
            "/characters",
            Some(character_json("Trinity", "Matrix")),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["movieName"], "Matrix");

    let movies = app.request("GET", "/movies", None, None).await;
    assert_eq!(movies.body[0]["nrCharacters"], 1);
}

#[tokio::test]
async fn test_character_crud() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;

    let created = app
        .request(
            "POST",
            "/characters",
            Some(character_json("Morpheus", "Matrix")),
            Some(&token),
        )
        .await;
    let id = created.body["id"].as_i64().expect("id");

    let updated = app
        .request(
            "PUT",
            &format!("/characters/{id}"),
            Some(character_json("Morpheus", "Matrix Reloaded")),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["movieName"], "Matrix Reloaded");

    let fetched = app
        .request("GET", &format!("/characters/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.body["movieName"], "Matrix Reloaded");

    let deleted = app
        .request("DELETE", &format!("/characters/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Character deleted successfully");

    let missing = app
        .request("GET", &format!("/characters/{id}"), None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bulk_insert_and_range_delete() {
    let app = helpers::TestApp::new().await;
    let batch = serde_json::json!([
        character_json("Ripley", "Alien"),
        character_json("Bishop", "Aliens"),
        character_json("Hicks", "Aliens"),
    ]);

    let created = app.request("POST", "/characters/bulk", Some(batch), None).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body.as_array().map(Vec::len), Some(3));

    let report = app
        .request("DELETE", "/characters/bulk/2/5", None, None)
        .await;
    assert_eq!(report.body["deleted"], serde_json::json!([2, 3]));
    assert_eq!(report.body["not_found"], serde_json::json!([4]));

    let count = app.request("GET", "/characters/count", None, None).await;
    assert_eq!(count.body["count"], 1);
}

#[tokio::test]
async fn test_generate_needs_movies() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;

    let refused = app
        .request("POST", "/characters/generate/3", None, Some(&token))
        .await;
    assert_eq!(refused.status, StatusCode::BAD_REQUEST);

    app.request("POST", "/movies", Some(movie_json("Heat")), Some(&token))
        .await;
    let generated = app
        .request("POST", "/characters/generate/3", None, Some(&token))
        .await;
    assert_eq!(generated.status, StatusCode::OK);
    assert_eq!(generated.body["message"], "Generated 3 characters");

    let listed = app.request("GET", "/characters", None, Some(&token)).await;
    let characters = listed.body.as_array().expect("list");
    assert_eq!(characters.len(), 3);
    assert!(characters.iter().all(|c| c["movieName"] == "Heat"));
}

#[tokio::test]
async fn test_list_by_username() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;

    let empty = app
        .request("GET", "/characters/username/neo", None, Some(&token))
        .await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, serde_json::json!([]));

    let unknown = app
        .request("GET", "/characters/username/ghost", None, Some(&token))
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generate_over_limit_is_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    app.request("POST", "/movies", Some(movie_json("Heat")), Some(&token))
        .await;

    let limit = app.state.config.limits.max_generate_count;
    let response = app
        .request(
            "POST",
            &format!("/characters/generate/{}", limit + 1),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let count = app.request("GET", "/characters/count", None, None).await;
    assert_eq!(count.body["count"], 0);
}
