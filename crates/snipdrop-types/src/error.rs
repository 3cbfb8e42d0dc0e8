use thiserror::Error;

/// Errors from repository operations (used by trait definitions in snipdrop-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors from bearer-token validation.
///
/// Display strings double as the HTTP response bodies, so they stay generic:
/// a claim-level failure must not tell the caller which claim was wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header is missing")]
    MissingHeader,

    #[error("Authorization header is malformed")]
    MalformedHeader,

    #[error("Invalid token")]
    InvalidToken,
}
