use crate::error::ApiError;

/// Fallback for any method/path combination without a handler
pub async fn route_not_found() -> ApiError {
    tracing::debug!("No route matched request");
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{send_empty, setup_test_app};
    use axum::{body::Body, http::Request, http::StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_path() {
        let (app, _store) = setup_test_app(vec![]);

        let response = send_empty(&app, "GET", "/groceries").await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, json!({"error": "Route not found"}));
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_paths() {
        let (app, store) = setup_test_app(vec![json!({"name": "milk", "quantity": 1})]);

        for (method, uri) in [
            ("PATCH", "/shopping-list"),
            ("DELETE", "/shopping-list"),
            ("PUT", "/shopping-list"),
            ("GET", "/shopping-list/0"),
            ("POST", "/shopping-list/0"),
        ] {
            let response = send_empty(&app, method, uri).await;
            assert_eq!(response.status, StatusCode::NOT_FOUND, "{} {}", method, uri);
            assert_eq!(response.body, json!({"error": "Route not found"}));
        }

        assert_eq!(store.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_head_is_not_routed() {
        let (app, _store) = setup_test_app(vec![]);

        let response = app
            .oneshot(
                Request::builder()
                    .method("HEAD")
                    .uri("/shopping-list")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // HEAD responses carry no body, so only the status is checked
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_docs_disabled_by_default() {
        let (app, _store) = setup_test_app(vec![]);

        let response = send_empty(&app, "GET", "/api-docs/openapi.json").await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}
