//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{hello, user};

/// Create the fixture router.
///
/// Exactly two routes; anything else falls through to axum's default 404.
pub fn create_router() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/user/:user_id", get(user))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn hello_returns_fixed_greeting() {
        let app = create_router();

        let response = app
            .oneshot(Request::builder().uri("/hello").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(body_string(response).await, r#"{"message":"Hello, World!"}"#);
    }

    #[tokio::test]
    async fn user_echoes_path_segment() {
        let app = create_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/user/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"id":"42","name":"User 42"}"#
        );
    }

    #[tokio::test]
    async fn user_decodes_percent_encoded_segment() {
        let app = create_router();

        // "héllo✓" percent-encoded
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/user/h%C3%A9llo%E2%9C%93")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["id"], "héllo✓");
        assert_eq!(body["name"], "User héllo✓");
    }

    #[tokio::test]
    async fn unknown_paths_return_404() {
        for path in ["/", "/goodbye", "/hello/extra", "/user/a/b"] {
            let app = create_router();

            let response = app
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
        }
    }

    #[tokio::test]
    async fn user_without_segment_returns_404() {
        let app = create_router();

        // Empty segment does not match the route; documented fixture behavior.
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/user/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let app = create_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
