//! Snipdrop REST API.
//!
//! Exposed as a library so integration tests can build the exact router
//! the binary serves; `main.rs` only adds configuration loading and the
//! listener.

pub mod http;
pub mod state;
