//! Query parameter extractor for the snippet list endpoint.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use snipdrop_core::repository::{SnippetQuery, SnippetSort};

use crate::http::error::AppError;

/// Raw query parameters as they arrive on the wire.
#[derive(Debug, Deserialize, Default)]
pub struct SnippetListParams {
    /// 1-based page number.
    pub page: Option<i64>,
    /// Rows per page.
    pub page_size: Option<i64>,
    /// Sort expression, e.g. `name` or `created_at desc`.
    pub sort: Option<String>,
    /// Case-insensitive match against name and value.
    pub search: Option<String>,
}

/// Validated list parameters. Extraction fails with 400 on non-numeric
/// paging values or a sort expression that names no known column.
pub struct ListQuery(pub SnippetQuery);

impl<S: Send + Sync> FromRequestParts<S> for ListQuery {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<SnippetListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        // A blank sort (`?sort=`) means no preference, same as leaving the
        // parameter off entirely.
        let sort = match params.sort.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(raw.parse::<SnippetSort>().map_err(AppError::Validation)?),
            None => None,
        };

        Ok(ListQuery(SnippetQuery {
            page: params.page.unwrap_or(1),
            page_size: params.page_size.unwrap_or(10),
            sort,
            search: params.search,
        }))
    }
}
