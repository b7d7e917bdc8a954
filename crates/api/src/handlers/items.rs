//! Handlers for the `/items` resource.
//!
//! There is no item store: reads echo their inputs and updates validate the
//! submitted item, then discard everything but its name.

use axum::Json;
use serde::{Deserialize, Serialize};
use store_core::models::Item;
use store_core::types::EntityId;

use crate::extract::{ValidJson, ValidPath, ValidQuery};

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /items/{item_id}`.
#[derive(Debug, Deserialize)]
pub struct ReadItemParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReadItemResponse {
    pub item_id: EntityId,
    /// Serialized as `null` when absent.
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateItemResponse {
    pub item_name: String,
    pub item_id: EntityId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /items/{item_id}?q=..
pub async fn read_item(
    ValidPath(item_id): ValidPath<EntityId>,
    ValidQuery(params): ValidQuery<ReadItemParams>,
) -> Json<ReadItemResponse> {
    Json(ReadItemResponse {
        item_id,
        q: params.q,
    })
}

/// PUT /items/{item_id}
///
/// The body's own `id` is not compared with the path id; the path id wins.
pub async fn update_item(
    ValidPath(item_id): ValidPath<EntityId>,
    ValidJson(item): ValidJson<Item>,
) -> Json<UpdateItemResponse> {
    tracing::debug!(
        item_id,
        body_id = item.id,
        tags = item.tags.len(),
        "Validated item update"
    );

    Json(UpdateItemResponse {
        item_name: item.name,
        item_id,
    })
}
