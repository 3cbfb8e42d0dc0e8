//! Shared domain types for Snipdrop.
//!
//! This crate contains the types used across the Snipdrop service: Snippet,
//! JWT claims, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod auth;
pub mod config;
pub mod error;
pub mod snippet;
