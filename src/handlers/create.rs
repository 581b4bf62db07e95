use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ItemResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation::validate_item;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /shopping-list handler - Append an item to the list
///
/// The body is parsed as JSON regardless of the request content type.
/// Fields other than `name` and `quantity` are stored as sent.
#[utoipa::path(
    post,
    path = routes::SHOPPING_LIST,
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Item appended", body = ItemResponse),
        (status = 400, description = "Invalid JSON or invalid item", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "shopping-list"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item: Item = serde_json::from_slice(&body)?;

    if !validate_item(&item) {
        tracing::info!("Rejected invalid item: {}", item);
        return Err(ApiError::InvalidItem);
    }

    let mut list = state.store.read_list().await?;
    list.push(item.clone());
    state.store.write_list(&list).await?;

    tracing::info!("Added item at index {}", list.len() - 1);
    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            message: "Item added".to_string(),
            item,
        }),
    ))
}
