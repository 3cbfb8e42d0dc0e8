//! Application error type mapping to HTTP status codes.
//!
//! Every failure renders as `{"error": "<message>"}`. Auth and
//! repository errors reuse their Display strings as the message, so the
//! response body is decided where the error is defined.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use snipdrop_types::error::{AuthError, RepositoryError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Snippet lookup misses, including ids that are not UUIDs.
    NotFound,
    /// Bad request input: body, query string, or sort expression.
    Validation(String),
    /// Authentication failure.
    Auth(AuthError),
    /// Storage failure.
    Repository(RepositoryError),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Snippet not found".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Auth(e) => (StatusCode::UNAUTHORIZED, e.to_string()),
            AppError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
