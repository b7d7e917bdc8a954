//! Route definitions for the `/items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET /{item_id}  -> read_item
/// PUT /{item_id}  -> update_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{item_id}",
        get(items::read_item).put(items::update_item),
    )
}
