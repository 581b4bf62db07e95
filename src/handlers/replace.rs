use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ItemResponse};
use crate::state::AppState;
use crate::validation::{parse_index, validate_item};
use axum::{body::Bytes, extract::State, http::{StatusCode, Uri}, Json};

/// PUT /shopping-list/{index} handler - Replace the item at a position
///
/// The index is checked against the current list before the body is looked
/// at, so a bad index wins over a bad payload.
#[utoipa::path(
    put,
    path = "/shopping-list/{index}",
    params(
        ("index" = String, Path, description = "Zero-based position of the item")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Item replaced", body = ItemResponse),
        (status = 400, description = "Invalid JSON or invalid item", body = ErrorResponse),
        (status = 404, description = "No item at that index", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "shopping-list"
)]
pub async fn replace_handler(
    State(state): State<AppState>,
    uri: Uri,
    body: Bytes,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let current = state.store.read_list().await?;
    let position = parse_index(uri.path(), current.len()).ok_or_else(|| {
        tracing::info!("No item at {} (list has {})", uri.path(), current.len());
        ApiError::ItemNotFound
    })?;

    let item: Item = serde_json::from_slice(&body)?;

    if !validate_item(&item) {
        tracing::info!("Rejected invalid item for index {}: {}", position, item);
        return Err(ApiError::InvalidItem);
    }

    // The list is read again; it may have shrunk since the bounds check
    let mut list = state.store.read_list().await?;
    let slot = list.get_mut(position).ok_or(ApiError::ItemNotFound)?;
    *slot = item.clone();
    state.store.write_list(&list).await?;

    tracing::info!("Updated item at index {}", position);
    Ok((
        StatusCode::OK,
        Json(ItemResponse {
            message: "Item updated".to_string(),
            item,
        }),
    ))
}
