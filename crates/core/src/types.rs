/// Identifier type shared by items, properties and tags.
pub type EntityId = i64;

/// Integer timestamp as submitted by clients. Epoch and unit are up to the client.
pub type Timestamp = i64;
