//! Unified error types for the fixture server.

use thiserror::Error;

/// Unified error type for the fixture server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// The configured bind address could not be constructed.
    #[error("invalid bind address {host}:{port}")]
    InvalidBindAddr {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
    },

    /// HTTP client error (self-benchmark).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error, typically a failed bind on a busy port.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
