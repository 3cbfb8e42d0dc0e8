//! Snippet repository trait definition.

use snipdrop_types::error::RepositoryError;
use snipdrop_types::snippet::{Snippet, SnippetId};

use super::SnippetQuery;

/// Repository trait for snippet persistence.
///
/// Implementations live in snipdrop-infra (PostgreSQL for production, an
/// in-memory store for tests). Uses native async fn in traits (Rust 2024
/// edition, no async_trait macro).
pub trait SnippetRepository: Send + Sync {
    /// List snippets honoring the query's clamping, search, sort, and
    /// pagination rules. Never returns partial results on failure.
    fn list(
        &self,
        query: &SnippetQuery,
    ) -> impl std::future::Future<Output = Result<Vec<Snippet>, RepositoryError>> + Send;

    /// Insert one snippet. Returns the stored snippet.
    fn create(
        &self,
        snippet: &Snippet,
    ) -> impl std::future::Future<Output = Result<Snippet, RepositoryError>> + Send;

    /// Fetch a snippet by id. An absent row is `Ok(None)`, never an error.
    fn get(
        &self,
        id: &SnippetId,
    ) -> impl std::future::Future<Output = Result<Option<Snippet>, RepositoryError>> + Send;

    /// Delete a snippet by id. A missing row and a deleted row are
    /// indistinguishable to the caller.
    fn delete(
        &self,
        id: &SnippetId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
