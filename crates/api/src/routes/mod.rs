pub mod auth;
pub mod items;
pub mod system;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the API route tree.
///
/// Mounted at the root, or under `/api` when static serving is enabled.
///
/// ```text
/// /                    version
/// /health              health check
/// /info                server info
///
/// /auth                pseudo-login (GET, query credentials)
///
/// /items/{item_id}     read (GET), update (PUT)
///
/// anything else        501 NOT_IMPLEMENTED
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(system::router())
        .merge(auth::router())
        .nest("/items", items::router())
        .fallback(handlers::system::not_implemented)
}
