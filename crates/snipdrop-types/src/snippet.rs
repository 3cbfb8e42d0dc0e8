use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a snippet, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnippetId(pub Uuid);

impl SnippetId {
    /// Create a new SnippetId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a SnippetId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SnippetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnippetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A stored text snippet.
///
/// Records are immutable once written: no field is ever updated in place,
/// and removal happens only through an explicit delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    /// Set by the writer at insert time, never updated.
    pub created_at: DateTime<Utc>,
    /// The snippet text itself.
    pub value: String,
    /// Display label shown in listings.
    pub name: String,
    /// Opaque identifier of the creating user, when known.
    pub author: Option<String>,
}

/// Request body for creating a snippet. Only `name` and `value` are
/// required -- `id` and `created_at` are stamped by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSnippetRequest {
    pub id: Option<SnippetId>,
    pub name: String,
    pub value: String,
    pub author: Option<String>,
}

impl CreateSnippetRequest {
    /// Turn the request into a full entity, generating the id (UUID v7)
    /// and creation timestamp when the client did not supply an id.
    pub fn into_snippet(self) -> Snippet {
        Snippet {
            id: self.id.unwrap_or_default(),
            created_at: Utc::now(),
            value: self.value,
            name: self.name,
            author: self.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_id_display_roundtrip() {
        let id = SnippetId::new();
        let s = id.to_string();
        let parsed: SnippetId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_snippet_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<SnippetId>().is_err());
    }

    #[test]
    fn test_into_snippet_generates_id_when_absent() {
        let request = CreateSnippetRequest {
            id: None,
            name: "greeting".to_string(),
            value: "hello world".to_string(),
            author: None,
        };
        let snippet = request.into_snippet();
        assert_eq!(snippet.name, "greeting");
        assert_eq!(snippet.value, "hello world");
        assert!(snippet.author.is_none());
    }

    #[test]
    fn test_into_snippet_keeps_supplied_id() {
        let id = SnippetId::new();
        let request = CreateSnippetRequest {
            id: Some(id),
            name: "greeting".to_string(),
            value: "hello".to_string(),
            author: Some("alice".to_string()),
        };
        let snippet = request.into_snippet();
        assert_eq!(snippet.id, id);
        assert_eq!(snippet.author.as_deref(), Some("alice"));
    }

    #[test]
    fn test_snippet_id_serializes_as_plain_uuid() {
        let id = SnippetId::new();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }
}
