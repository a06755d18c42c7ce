//! Integration tests for the movie endpoints.

mod helpers;

use axum::http::StatusCode;

use helpers::movie_json;

#[tokio::test]
async fn test_create_and_get_movie() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;

    let created = app
        .request("POST", "/movies", Some(movie_json("Matrix")), Some(&token))
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let id = created.body["id"].as_i64().expect("id");

    let fetched = app
        .request("GET", &format!("/movies/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "Matrix");
    assert_eq!(fetched.body["year"], 1999);
    assert_eq!(fetched.body["nrCharacters"], 0);
}

#[tokio::test]
async fn test_duplicate_name_is_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;

    app.request("POST", "/movies", Some(movie_json("Matrix")), Some(&token))
        .await;

    let duplicate = app
        .request("POST", "/movies", Some(movie_json("Matrix")), Some(&token))
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

    let sequel = app
        .request("POST", "/movies", Some(movie_json("Matrix 2")), Some(&token))
        .await;
    assert_eq!(sequel.status, StatusCode::OK);
    assert!(sequel.body["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_empty_name_fails_validation() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;

    let response = app
        .request("POST", "/movies", Some(movie_json("")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_and_count_with_trailing_slash() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    for name in ["Alien", "Aliens", "Alien 3"] {
        app.request("POST", "/movies", Some(movie_json(name)), Some(&token))
            .await;
    }

    let listed = app.request("GET", "/movies/?skip=1&limit=5", None, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let names: Vec<&str> = listed
        .body
        .as_array()
        .expect("list")
        .iter()
        .filter_map(|m| m["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Aliens", "Alien 3"]);

    let count = app.request("GET", "/movies/count/", None, None).await;
    assert_eq!(count.body["count"], 3);

    let names = app.request("GET", "/movies/names", None, Some(&token)).await;
    assert_eq!(names.body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_update_then_delete() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    let created = app
        .request("POST", "/movies", Some(movie_json("Matrix")), Some(&token))
        .await;
    let id = created.body["id"].as_i64().expect("id");

    let mut changed = movie_json("The Matrix");
    changed["year"] = serde_json::json!(2000);
    let updated = app
        .request("PUT", &format!("/movies/{id}"), Some(changed), Some(&token))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["name"], "The Matrix");
    assert_eq!(updated.body["year"], 2000);

    let deleted = app
        .request("DELETE", &format!("/movies/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Movie deleted successfully");

    let again = app
        .request("DELETE", &format!("/movies/{id}"), None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let missing = app
        .request("GET", &format!("/movies/{id}"), None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_movie_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;

    let response = app
        .request("PUT", "/movies/999", Some(movie_json("Ghost")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let count = app.request("GET", "/movies/count", None, None).await;
    assert_eq!(count.body["count"], 0);
}

#[tokio::test]
async fn test_delete_by_name() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    app.request("POST", "/movies", Some(movie_json("Heat")), Some(&token))
        .await;

    let response = app
        .request("DELETE", "/movies/by_name/Heat", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", "/movies/by_name/Heat", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bulk_insert_reports_skipped_names() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    for name in ["Jaws", "Rocky"] {
        app.request("POST", "/movies", Some(movie_json(name)), Some(&token))
            .await;
    }

    let batch = serde_json::json!([
        movie_json("Jaws"),
        movie_json("Rocky"),
        movie_json("Tron"),
        movie_json("Big"),
        movie_json("Up"),
    ]);
    let response = app.request("POST", "/movies/bulk", Some(batch), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["added_movies"].as_array().map(Vec::len), Some(3));
    assert_eq!(
        response.body["not_added_movies"].as_array().map(Vec::len),
        Some(2)
    );

    let count = app.request("GET", "/movies/count", None, None).await;
    assert_eq!(count.body["count"], 5);
}

#[tokio::test]
async fn test_delete_range_reports_missing_ids() {
    let app = helpers::TestApp::new().await;
    let batch = serde_json::json!([movie_json("A"), movie_json("B")]);
    app.request("POST", "/movies/bulk", Some(batch), None).await;

    let response = app.request("DELETE", "/movies/bulk/1/5", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["deleted"], serde_json::json!([1, 2]));
    assert_eq!(response.body["not_found"], serde_json::json!([3, 4]));
}

#[tokio::test]
async fn test_delete_duplicates_leaves_one_per_name() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    let first = app
        .request("POST", "/movies", Some(movie_json("Dune")), Some(&token))
        .await;
    let id = first.body["id"].as_i64().expect("id");

    // Uniqueness is only enforced on create, so a rename can collide.
    app.request("POST", "/movies", Some(movie_json("Dune II")), Some(&token))
        .await;
    let second = app
        .request("GET", "/movies?skip=1&limit=1", None, None)
        .await;
    let second_id = second.body[0]["id"].as_i64().expect("id");
    app.request(
        "PUT",
        &format!("/movies/{second_id}"),
        Some(movie_json("Dune")),
        Some(&token),
    )
    .await;

    let response = app
        .request("DELETE", "/movies/delete_duplicates", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let deleted = response.body["deleted_movies"].as_array().expect("list");
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0]["id"], id);

    let count = app.request("GET", "/movies/count", None, None).await;
    assert_eq!(count.body["count"], 1);
}

#[tokio::test]
async fn test_character_counts_are_stale_until_recompute() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    app.request("POST", "/movies", Some(movie_json("Heat")), Some(&token))
        .await;
    let chars = serde_json::json!([
        helpers::character_json("Neil", "Heat"),
        helpers::character_json("Vincent", "Heat"),
    ]);
    app.request("POST", "/characters/bulk", Some(chars), None)
        .await;

    let before = app.request("GET", "/movies", None, None).await;
    assert_eq!(before.body[0]["nrCharacters"], 0);

    let response = app
        .request("PUT", "/movies/update_nr_characters", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Aggregated column updated successfully"
    );

    let after = app.request("GET", "/movies", None, None).await;
    assert_eq!(after.body[0]["nrCharacters"], 2);
}

#[tokio::test]
async fn test_list_by_username() {
    let app = helpers::TestApp::new().await;
    app.register("neo", "password123").await;
    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({"username": "neo", "password": "password123"})),
            None,
        )
        .await;
    let token = login.body["token"].as_str().expect("token").to_string();
    let editor_id = login.body["user_id"].as_i64().expect("user id");

    let mut owned = movie_json("Owned");
    owned["editorId"] = serde_json::json!(editor_id);
    app.request("POST", "/movies", Some(owned), Some(&token))
        .await;
    app.request("POST", "/movies", Some(movie_json("Orphan")), Some(&token))
        .await;

    let response = app
        .request("GET", "/movies/username/neo", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let list = response.body.as_array().expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Owned");

    let unknown = app
        .request("GET", "/movies/username/ghost", None, Some(&token))
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_start_and_stop_generation() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/movies/generate/2", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Generating 2 movies in background every 1 seconds"
    );
    assert!(app.state.generator.is_running());

    let response = app.request("DELETE", "/movies/generate", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!app.state.generator.is_running());
}

#[tokio::test]
async fn test_oversized_range_and_generate_are_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.user_token("neo").await;
    app.request("POST", "/movies", Some(movie_json("Heat")), Some(&token))
        .await;

    let response = app
        .request("DELETE", "/movies/bulk/0/9223372036854775807", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request("POST", "/movies/generate/18446744073709551615", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!app.state.generator.is_running());

    let count = app.request("GET", "/movies/count", None, None).await;
    assert_eq!(count.body["count"], 1);
}
