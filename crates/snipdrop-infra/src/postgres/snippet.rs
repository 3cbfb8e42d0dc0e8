//! PostgreSQL snippet repository implementation.
//!
//! Implements `SnippetRepository` from `snipdrop-core` using sqlx. All SQL
//! is rendered from typed query parts; caller input only ever travels
//! through bound parameters.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use sqlx::Row;
use uuid::Uuid;

use snipdrop_core::repository::{SnippetQuery, SnippetRepository};
use snipdrop_types::error::RepositoryError;
use snipdrop_types::snippet::{Snippet, SnippetId};

/// PostgreSQL-backed implementation of `SnippetRepository`.
pub struct PgSnippetRepository {
    pool: PgPool,
}

impl PgSnippetRepository {
    /// Create a new repository backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping PostgreSQL rows to the domain Snippet.
struct SnippetRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    value: String,
    name: String,
    author: Option<String>,
}

impl SnippetRow {
    fn from_row(row: &sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
            value: row.try_get("value")?,
            name: row.try_get("name")?,
            author: row.try_get("author")?,
        })
    }

    fn into_snippet(self) -> Snippet {
        Snippet {
            id: SnippetId::from_uuid(self.id),
            created_at: self.created_at,
            value: self.value,
            name: self.name,
            author: self.author,
        }
    }
}

/// Render the listing SQL and the optional search argument.
///
/// The search term is bound once and reused for both columns ($1 appears
/// twice); LIMIT and OFFSET take the following placeholders. Sort field and
/// order come from closed enums, so the ORDER BY clause contains no caller
/// text.
fn build_list_query(query: &SnippetQuery) -> (String, Option<String>) {
    let mut sql = String::from("SELECT id, created_at, value, name, author FROM snippets");

    let search = query.search_term().map(|term| format!("%{term}%"));
    if search.is_some() {
        sql.push_str(" WHERE name ILIKE $1 OR value ILIKE $1");
    }

    let sort = query.sort.unwrap_or_default();
    sql.push_str(&format!(
        " ORDER BY {} {}",
        sort.field.as_sql(),
        sort.order.as_sql()
    ));

    let (limit_param, offset_param) = if search.is_some() { (2, 3) } else { (1, 2) };
    sql.push_str(&format!(" LIMIT ${limit_param} OFFSET ${offset_param}"));

    (sql, search)
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::Database(db_err)
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            RepositoryError::Conflict(db_err.message().to_string())
        }
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut => {
            RepositoryError::Connection
        }
        e => RepositoryError::Query(e.to_string()),
    }
}

impl SnippetRepository for PgSnippetRepository {
    async fn list(&self, query: &SnippetQuery) -> Result<Vec<Snippet>, RepositoryError> {
        let (sql, search) = build_list_query(query);
        let (limit, offset) = query.limit_offset();

        let mut stmt = sqlx::query(&sql);
        if let Some(term) = search {
            stmt = stmt.bind(term);
        }
        let rows = stmt
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let mut snippets = Vec::with_capacity(rows.len());
        for row in &rows {
            let snippet_row =
                SnippetRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            snippets.push(snippet_row.into_snippet());
        }

        Ok(snippets)
    }

    async fn create(&self, snippet: &Snippet) -> Result<Snippet, RepositoryError> {
        sqlx::query(
            "INSERT INTO snippets (id, created_at, value, name, author)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(snippet.id.0)
        .bind(snippet.created_at)
        .bind(&snippet.value)
        .bind(&snippet.name)
        .bind(&snippet.author)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(snippet.clone())
    }

    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, created_at, value, name, author FROM snippets WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => {
                let snippet_row =
                    SnippetRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(snippet_row.into_snippet()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &SnippetId) -> Result<(), RepositoryError> {
        // Zero rows affected is not an error: a missing row and a deleted
        // row are indistinguishable to callers.
        sqlx::query("DELETE FROM snippets WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipdrop_core::repository::SnippetSort;

    #[test]
    fn test_list_query_defaults() {
        let (sql, search) = build_list_query(&SnippetQuery::default());
        assert_eq!(
            sql,
            "SELECT id, created_at, value, name, author FROM snippets \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        assert!(search.is_none());
    }

    #[test]
    fn test_list_query_search_binds_one_parameter_twice() {
        let query = SnippetQuery {
            search: Some("rust".to_string()),
            ..Default::default()
        };
        let (sql, search) = build_list_query(&query);
        assert_eq!(
            sql,
            "SELECT id, created_at, value, name, author FROM snippets \
             WHERE name ILIKE $1 OR value ILIKE $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        );
        assert_eq!(search.as_deref(), Some("%rust%"));
        assert_eq!(sql.matches("$1").count(), 2);
    }

    #[test]
    fn test_list_query_empty_search_is_unfiltered() {
        let query = SnippetQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        let (sql, search) = build_list_query(&query);
        assert!(!sql.contains("WHERE"));
        assert!(search.is_none());
    }

    #[test]
    fn test_list_query_renders_requested_sort() {
        let query = SnippetQuery {
            sort: Some("name asc".parse::<SnippetSort>().unwrap()),
            ..Default::default()
        };
        let (sql, _) = build_list_query(&query);
        assert!(sql.contains("ORDER BY name ASC"));
    }

    #[test]
    fn test_list_query_search_and_sort_together() {
        let query = SnippetQuery {
            sort: Some("author desc".parse::<SnippetSort>().unwrap()),
            search: Some("todo".to_string()),
            ..Default::default()
        };
        let (sql, search) = build_list_query(&query);
        assert_eq!(
            sql,
            "SELECT id, created_at, value, name, author FROM snippets \
             WHERE name ILIKE $1 OR value ILIKE $1 \
             ORDER BY author DESC LIMIT $2 OFFSET $3"
        );
        assert_eq!(search.as_deref(), Some("%todo%"));
    }
}
