//! In-memory snippet repository.
//!
//! Honors the same clamping, search, sort, and pagination rules as the
//! PostgreSQL store. Intended for tests and local development; not
//! optimized for performance.

use std::sync::RwLock;

use snipdrop_core::repository::{SnippetQuery, SnippetRepository, SortField, SortOrder};
use snipdrop_types::error::RepositoryError;
use snipdrop_types::snippet::{Snippet, SnippetId};

/// In-memory implementation of `SnippetRepository`.
#[derive(Debug, Default)]
pub struct MemorySnippetRepository {
    snippets: RwLock<Vec<Snippet>>,
}

impl MemorySnippetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_search(snippet: &Snippet, term: Option<&str>) -> bool {
    match term {
        Some(term) => {
            let needle = term.to_lowercase();
            snippet.name.to_lowercase().contains(&needle)
                || snippet.value.to_lowercase().contains(&needle)
        }
        None => true,
    }
}

fn sort_snippets(snippets: &mut [Snippet], query: &SnippetQuery) {
    let sort = query.sort.unwrap_or_default();
    snippets.sort_by(|a, b| {
        let ordering = match sort.field {
            SortField::Id => a.id.0.cmp(&b.id.0),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Value => a.value.cmp(&b.value),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Author => a.author.cmp(&b.author),
        };
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

impl SnippetRepository for MemorySnippetRepository {
    async fn list(&self, query: &SnippetQuery) -> Result<Vec<Snippet>, RepositoryError> {
        let snippets = self
            .snippets
            .read()
            .map_err(|_| RepositoryError::Query("lock poisoned".to_string()))?;

        let mut matched: Vec<Snippet> = snippets
            .iter()
            .filter(|s| matches_search(s, query.search_term()))
            .cloned()
            .collect();
        drop(snippets);

        sort_snippets(&mut matched, query);

        let (limit, offset) = query.limit_offset();
        Ok(matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn create(&self, snippet: &Snippet) -> Result<Snippet, RepositoryError> {
        let mut snippets = self
            .snippets
            .write()
            .map_err(|_| RepositoryError::Query("lock poisoned".to_string()))?;

        if snippets.iter().any(|s| s.id == snippet.id) {
            return Err(RepositoryError::Conflict(format!(
                "snippet '{}' already exists",
                snippet.id
            )));
        }

        snippets.push(snippet.clone());
        Ok(snippet.clone())
    }

    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>, RepositoryError> {
        let snippets = self
            .snippets
            .read()
            .map_err(|_| RepositoryError::Query("lock poisoned".to_string()))?;

        Ok(snippets.iter().find(|s| s.id == *id).cloned())
    }

    async fn delete(&self, id: &SnippetId) -> Result<(), RepositoryError> {
        let mut snippets = self
            .snippets
            .write()
            .map_err(|_| RepositoryError::Query("lock poisoned".to_string()))?;

        // Removing nothing and removing one row look the same to callers.
        snippets.retain(|s| s.id != *id);
        Ok(())
    }
}
