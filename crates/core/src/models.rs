//! Item, property and tag shapes exchanged with clients.
//!
//! These are transient, per-request values. Only shape and type are checked
//! during deserialization: nothing relates `min`/`max` to `value`, nothing
//! deduplicates tag ids, and timestamps are taken as given.

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// A named attribute attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(deserialize_with = "lenient::int")]
    pub id: EntityId,
    pub name: String,
    /// Stored as text whatever the logical type is.
    pub value: String,
    /// Rendering hint for clients (e.g. `"ean13"`).
    pub display_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_int")]
    pub min: Option<i64>,
    #[serde(default, deserialize_with = "lenient::option_int")]
    pub max: Option<i64>,
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// Attachment name to arbitrary JSON value. Passed through unvalidated.
pub type Attachments = serde_json::Map<String, serde_json::Value>;

/// A stored physical object with its descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "lenient::int")]
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub location: String,
    /// Ids of [`Tag`]s, in client order.
    #[serde(deserialize_with = "lenient::vec_int")]
    pub tags: Vec<EntityId>,
    #[serde(default)]
    pub properties_custom: Vec<Property>,
    #[serde(default)]
    pub properties_internal: Vec<Property>,
    #[serde(default)]
    pub attachments: Attachments,
    #[serde(deserialize_with = "lenient::int")]
    pub last_edited: Timestamp,
    #[serde(deserialize_with = "lenient::int")]
    pub created: Timestamp,
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// Categorization entity referenced by [`Item::tags`]. Not routed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: EntityId,
    pub name: String,
    /// Packed `0xRRGGBB`.
    pub color: u32,
    pub icon: Option<EntityId>,
}
