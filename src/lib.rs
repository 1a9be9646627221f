//! Minimal two-route JSON HTTP server fixture.
//!
//! This crate exists to be pointed at by load-testing tools (wrk, hey, k6,
//! and friends). The wire surface is deliberately tiny and fixed:
//!
//! ```text
//! GET /hello           -> {"message":"Hello, World!"}          200
//! GET /user/:user_id   -> {"id":"<id>","name":"User <id>"}     200
//! anything else        -> 404
//! ```
//!
//! Every request is stateless; there is no shared mutable state behind the
//! router, so concurrent requests never contend with each other.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Router and handlers for the two fixture routes
//! - [`metrics`]: Request counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
