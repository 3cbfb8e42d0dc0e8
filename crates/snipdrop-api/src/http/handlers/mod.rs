//! HTTP request handlers.

pub mod snippet;
