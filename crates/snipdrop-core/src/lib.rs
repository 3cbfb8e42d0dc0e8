//! Repository ports and service layer for Snipdrop.
//!
//! This crate defines the "ports" (repository traits) that the
//! infrastructure layer implements, plus the query types whose clamping and
//! pagination rules every backing store shares. It depends only on
//! `snipdrop-types` -- never on `snipdrop-infra` or any database/IO crate.

pub mod auth;
pub mod repository;
pub mod service;
