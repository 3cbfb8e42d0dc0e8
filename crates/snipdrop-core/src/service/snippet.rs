//! Snippet service.
//!
//! A deliberately thin pass-through: validation happens at the transport
//! boundary and the listing rules live in the query types, so the service
//! adds no behavior of its own. It exists to keep the transport decoupled
//! from the repository trait and to give cross-cutting concerns a seam.

use snipdrop_types::error::RepositoryError;
use snipdrop_types::snippet::{Snippet, SnippetId};

use crate::repository::{SnippetQuery, SnippetRepository};

/// Service delegating snippet operations to a repository.
///
/// Generic over the repository to maintain clean architecture --
/// snipdrop-core never depends on snipdrop-infra.
pub struct SnippetService<R: SnippetRepository> {
    repository: R,
}

impl<R: SnippetRepository> SnippetService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &SnippetQuery) -> Result<Vec<Snippet>, RepositoryError> {
        self.repository.list(query).await
    }

    pub async fn create(&self, snippet: &Snippet) -> Result<Snippet, RepositoryError> {
        self.repository.create(snippet).await
    }

    pub async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>, RepositoryError> {
        self.repository.get(id).await
    }

    pub async fn delete(&self, id: &SnippetId) -> Result<(), RepositoryError> {
        self.repository.delete(id).await
    }
}
