use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A shopping list entry
///
/// Items are kept as raw JSON so that any extra fields a client sends
/// alongside `name` and `quantity` are stored untouched.
pub type Item = JsonValue;

/// Response type for successful POST and PUT operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub message: String,
    pub item: JsonValue,
}

/// Response type for successful DELETE operations
///
/// The removed item is wrapped in a single-element array.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub item: Vec<JsonValue>,
}
