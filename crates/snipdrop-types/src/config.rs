//! Runtime configuration.
//!
//! Populated from environment variables by `snipdrop_infra::config`; this
//! crate only defines the shape.

/// Complete application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port (bound on 0.0.0.0).
    pub port: u16,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

/// PostgreSQL connection parameters.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

/// Token-validation parameters.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Normalized issuer URL, always ending with `/`. Tokens must carry
    /// exactly this value in `iss`.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Reserved client identifier; loaded but not used by the service.
    pub client_id: Option<String>,
}

impl AuthConfig {
    /// Key-set endpoint derived from the issuer.
    pub fn jwks_url(&self) -> String {
        format!(
            "{}/.well-known/jwks.json",
            self.issuer.trim_end_matches('/')
        )
    }
}
