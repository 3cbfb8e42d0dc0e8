//! Snippet CRUD handlers.
//!
//! Handlers stay generic over the repository; the router pins them to
//! the state's concrete type.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;

use snipdrop_core::repository::SnippetRepository;
use snipdrop_types::snippet::{CreateSnippetRequest, Snippet, SnippetId};

use crate::http::error::AppError;
use crate::http::extractors::auth::Authenticated;
use crate::http::extractors::query::ListQuery;
use crate::state::AppState;

/// GET /snippets - List snippets with paging, search, and sorting.
pub async fn list_snippets<R: SnippetRepository>(
    State(state): State<AppState<R>>,
    ListQuery(query): ListQuery,
) -> Result<Json<Vec<Snippet>>, AppError> {
    let snippets = state.snippet_service.list(&query).await?;
    Ok(Json(snippets))
}

/// POST /snippets - Store a snippet. Requires a bearer token.
pub async fn create_snippet<R: SnippetRepository>(
    State(state): State<AppState<R>>,
    _auth: Authenticated,
    body: Result<Json<CreateSnippetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Snippet>), AppError> {
    // The token is checked before the body is read, so a bad token
    // answers 401 even when the payload is also bad.
    let Json(body) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    let snippet = body.into_snippet();
    let created = state.snippet_service.create(&snippet).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /snippets/{id} - Fetch a single snippet by id.
pub async fn get_snippet<R: SnippetRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Snippet>, AppError> {
    // An id that is not a UUID cannot name a stored snippet.
    let id = id.parse::<SnippetId>().map_err(|_| AppError::NotFound)?;

    match state.snippet_service.get(&id).await? {
        Some(snippet) => Ok(Json(snippet)),
        None => Err(AppError::NotFound),
    }
}

/// DELETE /snippets/{id} - Remove a snippet if it exists.
pub async fn delete_snippet<R: SnippetRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    // Deletion reports success whether or not a row existed, and an id
    // that is not a UUID cannot match a row.
    if let Ok(id) = id.parse::<SnippetId>() {
        state.snippet_service.delete(&id).await?;
    }

    Ok(Json(json!({ "message": "Snippet deleted" })))
}
