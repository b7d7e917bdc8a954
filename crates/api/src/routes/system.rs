//! Route definitions for service-level endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::system;
use crate::state::AppState;

/// ```text
/// GET /        -> version
/// GET /health  -> health_check
/// GET /info    -> server_info
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(system::version))
        .route("/health", get(system::health_check))
        .route("/info", get(system::server_info))
}
