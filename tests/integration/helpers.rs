//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use cinedex_api::AppState;
use cinedex_core::config::{AppConfig, DatabaseConfig};
use cinedex_database::{DatabasePool, migration};

/// Test application context
pub struct TestApp {
    /// The full application, trailing-slash normalization included
    pub app: NormalizePath<Router>,
    /// Shared state, for reaching the hub and services directly
    pub state: AppState,
}

/// Captured response status and JSON body
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory database
    pub async fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                ..DatabaseConfig::default()
            },
            ..AppConfig::default()
        };

        let database = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to open test database");
        migration::run_migrations(database.pool())
            .await
            .expect("Failed to run migrations");

        let state = cinedex_api::build_state(config, database.into_pool())
            .expect("Failed to build application state");
        let app = cinedex_api::build_app(state.clone());

        Self { app, state }
    }

    /// Register a user through the API
    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "username": username,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Login and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.body["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Register then login, returning the token
    pub async fn user_token(&self, username: &str) -> String {
        self.register(username, "password123").await;
        self.login(username, "password123").await
    }

    /// Make an HTTP request against the application
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&body_bytes).into_owned())
        });

        TestResponse { status, body }
    }
}

/// A movie payload with the given name
pub fn movie_json(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "year": 1999,
        "duration": "2h 16m",
        "genre": "Sci-Fi",
        "description": "A hacker learns the truth.",
    })
}

/// A character payload for the given movie
pub fn character_json(name: &str, movie_name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "movieName": movie_name,
        "description": "Lead",
    })
}
