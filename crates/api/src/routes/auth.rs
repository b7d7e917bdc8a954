//! Route definitions for the `/auth` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// GET /auth  -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/auth", get(auth::login))
}
