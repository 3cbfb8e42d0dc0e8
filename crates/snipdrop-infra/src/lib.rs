//! Infrastructure layer for Snipdrop.
//!
//! Contains implementations of the repository trait defined in
//! `snipdrop-core` (PostgreSQL for production, in-memory for tests), the
//! JWT verifier backed by a cached remote key set, and the environment
//! configuration loader.

pub mod auth;
pub mod config;
pub mod memory;
pub mod postgres;
