//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (snipdrop-infra) implements. The core crate never depends on any
//! specific storage technology.
//!
//! The query types here carry the listing contract: page clamping, the
//! offset law, the empty-search rule, and the closed set of sortable
//! columns. Keeping them in one place means the PostgreSQL store and the
//! in-memory store cannot drift apart.

pub mod snippet;

pub use snippet::SnippetRepository;

use std::str::FromStr;

/// Sort order for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order: '{other}'")),
        }
    }
}

/// Columns a caller may sort by. Parsing is the only way in from request
/// input, so no caller-supplied text ever reaches the SQL rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    CreatedAt,
    Value,
    Name,
    Author,
}

impl SortField {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::CreatedAt => "created_at",
            SortField::Value => "value",
            SortField::Name => "name",
            SortField::Author => "author",
        }
    }
}

impl Default for SortField {
    fn default() -> Self {
        SortField::CreatedAt
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "created_at" => Ok(SortField::CreatedAt),
            "value" => Ok(SortField::Value),
            "name" => Ok(SortField::Name),
            "author" => Ok(SortField::Author),
            other => Err(format!("invalid sort field: '{other}'")),
        }
    }
}

/// A parsed sort expression, e.g. `"name asc"` or just `"name"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SnippetSort {
    /// Newest first, matching the listing default when no sort is given.
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

impl FromStr for SnippetSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let field = tokens
            .next()
            .ok_or_else(|| "empty sort expression".to_string())?
            .parse::<SortField>()?;
        // A bare field sorts ascending, like SQL's own ORDER BY default.
        let order = match tokens.next() {
            Some(raw) => raw.parse::<SortOrder>()?,
            None => SortOrder::Asc,
        };
        if tokens.next().is_some() {
            return Err(format!("invalid sort expression: '{s}'"));
        }
        Ok(Self { field, order })
    }
}

/// Listing parameters for snippet queries. One instance per request.
#[derive(Debug, Clone)]
pub struct SnippetQuery {
    /// 1-based page number. Values below 1 are clamped to 1.
    pub page: i64,
    /// Page size. Values of 0 or below fall back to 10.
    pub page_size: i64,
    /// Requested ordering; newest-first when absent.
    pub sort: Option<SnippetSort>,
    /// Case-insensitive substring matched against name or value.
    pub search: Option<String>,
}

impl Default for SnippetQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            sort: None,
            search: None,
        }
    }
}

impl SnippetQuery {
    /// Clamp the paging inputs and derive `(limit, offset)`.
    ///
    /// offset = (page - 1) * page_size, computed after the clamp, so any
    /// out-of-range input lands on the first page rather than failing. The
    /// multiply saturates; a page near `i64::MAX` reads as an empty page
    /// past the end instead of overflowing.
    pub fn limit_offset(&self) -> (i64, i64) {
        let page = if self.page < 1 { 1 } else { self.page };
        let page_size = if self.page_size <= 0 { 10 } else { self.page_size };
        (page_size, (page - 1).saturating_mul(page_size))
    }

    /// The search term, with an empty string treated as no filter.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}
