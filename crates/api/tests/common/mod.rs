#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use store_api::config::ServerConfig;
use store_api::router::build_app_router;
use store_api::state::AppState;
use store_core::token::SeededTokenSource;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the development defaults (any CORS origin, API at the root) and binds
/// nowhere; tests drive the router directly.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build the full application router with the production token source.
///
/// Uses the same builder as `main.rs` so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app() -> Router {
    build_app_router(AppState::new(test_config()))
}

/// Build the application with a deterministic token source.
pub fn build_seeded_app(seed: u64) -> Router {
    build_app_with(test_config(), seed)
}

/// Build the application from an explicit config and token seed.
pub fn build_app_with(config: ServerConfig, seed: u64) -> Router {
    let state = AppState::with_token_source(config, Arc::new(SeededTokenSource::new(seed)));
    build_app_router(state)
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body to `uri`.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A well-formed item body with only the required fields set.
pub fn widget_item(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Widget",
        "description": "A small widget",
        "image": "http://host/widget.png",
        "location": "Shelf 3",
        "tags": [1, 2],
        "last_edited": 1_700_000_100,
        "created": 1_700_000_000
    })
}
