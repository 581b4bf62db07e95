use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{DeleteResponse, ItemResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "shopping-list-api",
        version = "0.1.0",
        description = "A shopping list stored in a single JSON file"
    ),
    paths(
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::replace::replace_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            ItemResponse,
            DeleteResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "shopping-list", description = "Shopping list operations")
    )
)]
pub struct ApiDoc;
