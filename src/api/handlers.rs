//! HTTP API handlers.
//!
//! Both handlers are stateless: each request builds its response struct,
//! serializes it, and discards it. Nothing is shared across requests.

use axum::{extract::Path, response::IntoResponse, Json};
use serde::Serialize;

use crate::metrics;

/// Body of `GET /hello`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HelloResponse {
    /// Fixed greeting.
    pub message: &'static str,
}

/// Body of `GET /user/:user_id`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserResponse {
    /// The path segment, verbatim.
    pub id: String,
    /// "User " prepended to the path segment.
    pub name: String,
}

impl UserResponse {
    /// Build the response for a given path segment.
    pub fn for_id(id: String) -> Self {
        let name = format!("User {id}");
        Self { id, name }
    }
}

/// `GET /hello` - always returns the fixed greeting with 200.
pub async fn hello() -> impl IntoResponse {
    metrics::inc_requests_served("/hello");
    Json(HelloResponse {
        message: "Hello, World!",
    })
}

/// `GET /user/:user_id` - echoes the path segment with 200.
///
/// The segment is arbitrary text: no validation, any unicode or
/// percent-encoded characters are accepted (axum decodes them).
pub async fn user(Path(user_id): Path<String>) -> impl IntoResponse {
    metrics::inc_requests_served("/user/:user_id");
    Json(UserResponse::for_id(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_response_concatenates_name() {
        let response = UserResponse::for_id("42".to_string());
        assert_eq!(response.id, "42");
        assert_eq!(response.name, "User 42");
    }

    #[test]
    fn user_response_keeps_unicode_verbatim() {
        let response = UserResponse::for_id("héllo✓".to_string());
        assert_eq!(response.id, "héllo✓");
        assert_eq!(response.name, "User héllo✓");
    }

    #[test]
    fn hello_body_serializes_exactly() {
        let body = serde_json::to_string(&HelloResponse {
            message: "Hello, World!",
        })
        .unwrap();

        assert_eq!(body, r#"{"message":"Hello, World!"}"#);
    }

    #[test]
    fn user_body_serializes_in_declared_key_order() {
        let body = serde_json::to_string(&UserResponse::for_id("42".to_string())).unwrap();
        assert_eq!(body, r#"{"id":"42","name":"User 42"}"#);
    }
}
