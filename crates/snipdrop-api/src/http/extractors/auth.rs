//! Bearer-token authentication extractor.
//!
//! Extracting [`Authenticated`] pulls the token from the
//! `Authorization: Bearer <token>` header and verifies it against the
//! issuer's JWKS. The three failure modes keep distinct messages
//! (missing header, malformed header, invalid token) but all answer 401.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use snipdrop_core::repository::SnippetRepository;
use snipdrop_types::auth::Claims;
use snipdrop_types::error::AuthError;

use crate::http::error::AppError;
use crate::state::AppState;

/// Authenticated request marker carrying the verified claims.
pub struct Authenticated(pub Claims);

impl<R: SnippetRepository> FromRequestParts<AppState<R>> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?;

        let value = header.to_str().map_err(|_| AuthError::MalformedHeader)?;
        let token = extract_bearer(value)?;

        let claims = state.verifier.verify(token).await?;
        Ok(Authenticated(claims))
    }
}

/// Pull the token out of a `Bearer <token>` header value.
///
/// The scheme is matched case-sensitively and the separator must be a
/// single space; tabs, doubled spaces, or anything after the token make
/// the header malformed.
fn extract_bearer(value: &str) -> Result<&str, AuthError> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}
