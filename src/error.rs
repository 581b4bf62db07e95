use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const INVALID_ITEM_MESSAGE: &str =
    "Invalid input. Name must be non-empty and quantity must be positive.";

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every variant renders as a JSON body of the form `{"error": "..."}` with
/// the status code matching the failure.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the method and path
    RouteNotFound,
    /// Index is not an integer or is outside the current list
    ItemNotFound,
    /// Item failed name/quantity validation
    InvalidItem,
    /// Request body is not valid JSON
    JsonError(serde_json::Error),
    /// Reading or writing the shopping list failed
    StorageError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "Route not found".to_string()),
            ApiError::ItemNotFound => (StatusCode::NOT_FOUND, "Item not found".to_string()),
            ApiError::InvalidItem => (StatusCode::BAD_REQUEST, INVALID_ITEM_MESSAGE.to_string()),
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON: {}", err),
            ),
            ApiError::StorageError(err) => {
                tracing::error!("Storage failure: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Storage error: {:#}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StorageError(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}
