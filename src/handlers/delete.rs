use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteResponse;
use crate::state::AppState;
use crate::validation::parse_index;
use axum::{extract::State, http::{StatusCode, Uri}, Json};

/// DELETE /shopping-list/{index} handler - Remove the item at a position
///
/// Later items shift down by one. The removed item is returned wrapped in a
/// single-element array.
#[utoipa::path(
    delete,
    path = "/shopping-list/{index}",
    params(
        ("index" = String, Path, description = "Zero-based position of the item")
    ),
    responses(
        (status = 200, description = "Item removed", body = DeleteResponse),
        (status = 404, description = "No item at that index", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "shopping-list"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    let mut list = state.store.read_list().await?;
    let position = parse_index(uri.path(), list.len()).ok_or_else(|| {
        tracing::info!("No item at {} (list has {})", uri.path(), list.len());
        ApiError::ItemNotFound
    })?;

    let removed = list.remove(position);
    state.store.write_list(&list).await?;

    tracing::info!("Deleted item at index {} ({} remaining)", position, list.len());
    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            message: "Item deleted".to_string(),
            item: vec![removed],
        }),
    ))
}
