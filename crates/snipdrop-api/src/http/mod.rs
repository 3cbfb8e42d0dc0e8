//! HTTP layer for the snippet API.
//!
//! Axum-based routes with bearer-token authentication on writes,
//! plain JSON bodies, and CORS open to any origin.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
