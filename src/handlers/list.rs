use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /shopping-list handler - Return the whole shopping list
#[utoipa::path(
    get,
    path = routes::SHOPPING_LIST,
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<serde_json::Value>),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "shopping-list"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let list = state.store.read_list().await?;

    tracing::info!("Listed {} items", list.len());
    Ok((StatusCode::OK, Json(list)))
}
