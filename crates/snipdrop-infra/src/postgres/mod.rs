//! PostgreSQL storage layer.
//!
//! Repository implementation backed by sqlx with a shared connection pool.
//! The `snippets` table is created out-of-band from `schema.sql`.

pub mod pool;
pub mod snippet;
