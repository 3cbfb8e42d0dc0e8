use serde::{Deserialize, Serialize};

/// The `aud` claim: authorization servers emit either a single string or an
/// array of strings, so both shapes deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    /// Whether the expected audience appears in the claim.
    pub fn contains(&self, expected: &str) -> bool {
        match self {
            Audience::Single(aud) => aud == expected,
            Audience::Multiple(auds) => auds.iter().any(|aud| aud == expected),
        }
    }
}

/// Claims carried by an access token after validation.
///
/// `sub`, `nbf`, and `iat` are optional because not every authorization
/// server includes them; `exp` is always required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub aud: Audience,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Space-separated OAuth scopes, when the authorization server grants any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
