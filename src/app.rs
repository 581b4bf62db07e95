use axum::{
    routing::{delete, get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, delete_handler, list_handler, replace_handler, route_not_found,
};
use crate::routes;
use crate::state::AppState;

/// Build the HTTP router
///
/// Known paths requested with an unsupported method answer the same
/// `Route not found` 404 as unknown paths, instead of axum's default 405.
/// `HEAD` is routed to the fallback explicitly since `get` would answer it.
pub fn build_router(state: AppState, enable_api_docs: bool) -> Router {
    let router = Router::new()
        .route(
            routes::SHOPPING_LIST,
            get(list_handler)
                .post(create_handler)
                .head(route_not_found)
                .fallback(route_not_found),
        )
        .route(routes::SHOPPING_LIST_ITEM, item_routes())
        .route(routes::SHOPPING_LIST_ITEM_EMPTY, item_routes())
        .fallback(route_not_found)
        .with_state(state);

    let router = if enable_api_docs {
        let docs = SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi());
        router.merge(docs)
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

fn item_routes() -> MethodRouter<AppState> {
    delete(delete_handler)
        .put(replace_handler)
        .fallback(route_not_found)
}
