//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use cinedex_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// A `"*"` origin is mirrored back when credentials are allowed.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(config.max_age_seconds));

    let wildcard = config.allowed_origins.iter().any(|o| o == "*");
    layer = match (wildcard, config.allow_credentials) {
        (true, true) => layer.allow_origin(AllowOrigin::mirror_request()),
        (true, false) => layer.allow_origin(Any),
        (false, _) => {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            layer.allow_origin(origins)
        }
    };

    layer.allow_credentials(config.allow_credentials)
}
