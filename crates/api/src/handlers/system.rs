//! Service-level handlers: version, health, server info and the fallback.

use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use serde::Serialize;
use store_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// API versions this server speaks.
pub const SUPPORTED_API_VERSIONS: &[u32] = &[1];

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerInfoResponse {
    pub supported_api_versions: &'static [u32],
    pub server_version: String,
    /// Target operating system (e.g. `"linux"`).
    pub os: &'static str,
    /// Target architecture (e.g. `"x86_64"`).
    pub arch: &'static str,
}

/// GET /
///
/// Report the static service version.
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: state.config.service.version.clone(),
    })
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.config.service.version.clone(),
    })
}

/// GET /info
pub async fn server_info(State(state): State<AppState>) -> Json<ServerInfoResponse> {
    Json(ServerInfoResponse {
        supported_api_versions: SUPPORTED_API_VERSIONS,
        server_version: state.config.service.version.clone(),
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
    })
}

/// Fallback for any path without a route.
pub async fn not_implemented(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route for path");
    AppError::Core(CoreError::NotImplemented(format!(
        "{} is not implemented",
        uri.path()
    )))
}
