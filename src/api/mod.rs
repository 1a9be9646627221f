//! HTTP API module for the two fixture endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::{HelloResponse, UserResponse};
pub use routes::create_router;
