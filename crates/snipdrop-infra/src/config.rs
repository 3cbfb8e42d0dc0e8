//! Application configuration loaded from environment variables.

use anyhow::Context;

use snipdrop_types::config::{AppConfig, AuthConfig, DatabaseConfig};

/// Load configuration from environment variables.
///
/// Required:
/// - `SNIPDROP_AUTH_ISSUER`: token issuer, either a bare domain
///   (`tenant.auth.example.com`) or a full URL; normalized to end with `/`
/// - `SNIPDROP_AUTH_AUDIENCE`: expected `aud` claim
///
/// Optional:
/// - `SNIPDROP_PORT`: HTTP listen port (default: 8080)
/// - `SNIPDROP_DB_HOST`: PostgreSQL host (default: "localhost")
/// - `SNIPDROP_DB_PORT`: PostgreSQL port (default: 5432)
/// - `SNIPDROP_DB_USER`: PostgreSQL user (default: "postgres")
/// - `SNIPDROP_DB_PASSWORD`: PostgreSQL password (default: empty)
/// - `SNIPDROP_DB_NAME`: database name (default: "snipdrop")
/// - `SNIPDROP_AUTH_CLIENT_ID`: reserved client identifier
pub fn load_from_env() -> anyhow::Result<AppConfig> {
    let port = env_or("SNIPDROP_PORT", "8080")
        .parse::<u16>()
        .context("SNIPDROP_PORT must be a port number")?;

    let database = DatabaseConfig {
        host: env_or("SNIPDROP_DB_HOST", "localhost"),
        port: env_or("SNIPDROP_DB_PORT", "5432")
            .parse::<u16>()
            .context("SNIPDROP_DB_PORT must be a port number")?,
        user: env_or("SNIPDROP_DB_USER", "postgres"),
        password: env_or("SNIPDROP_DB_PASSWORD", ""),
        dbname: env_or("SNIPDROP_DB_NAME", "snipdrop"),
    };

    let issuer = std::env::var("SNIPDROP_AUTH_ISSUER")
        .context("SNIPDROP_AUTH_ISSUER is required (issuer domain or URL)")?;
    let audience = std::env::var("SNIPDROP_AUTH_AUDIENCE")
        .context("SNIPDROP_AUTH_AUDIENCE is required (expected aud claim)")?;

    let auth = AuthConfig {
        issuer: normalize_issuer(&issuer),
        audience,
        client_id: std::env::var("SNIPDROP_AUTH_CLIENT_ID").ok(),
    };

    tracing::info!(
        port,
        db_host = %database.host,
        db_name = %database.dbname,
        issuer = %auth.issuer,
        audience = %auth.audience,
        "configuration loaded"
    );

    Ok(AppConfig {
        port,
        database,
        auth,
    })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Expand a bare domain to `https://{domain}/` and ensure a trailing slash.
/// Tokens carry the normalized form in `iss`, so the comparison in the
/// verifier works off this value verbatim.
fn normalize_issuer(raw: &str) -> String {
    let mut issuer = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    if !issuer.ends_with('/') {
        issuer.push('/');
    }
    issuer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "SNIPDROP_PORT",
        "SNIPDROP_DB_HOST",
        "SNIPDROP_DB_PORT",
        "SNIPDROP_DB_USER",
        "SNIPDROP_DB_PASSWORD",
        "SNIPDROP_DB_NAME",
        "SNIPDROP_AUTH_ISSUER",
        "SNIPDROP_AUTH_AUDIENCE",
        "SNIPDROP_AUTH_CLIENT_ID",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("SNIPDROP_AUTH_ISSUER", "tenant.auth.example.com"),
        ("SNIPDROP_AUTH_AUDIENCE", "https://api.example.com"),
    ];

    #[test]
    fn config_defaults() {
        with_env_vars(REQUIRED, || {
            let config = load_from_env().unwrap();
            assert_eq!(config.port, 8080);
            assert_eq!(config.database.host, "localhost");
            assert_eq!(config.database.port, 5432);
            assert_eq!(config.database.user, "postgres");
            assert_eq!(config.database.password, "");
            assert_eq!(config.database.dbname, "snipdrop");
            assert!(config.auth.client_id.is_none());
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("SNIPDROP_PORT", "9090"),
                ("SNIPDROP_DB_HOST", "db.internal"),
                ("SNIPDROP_DB_PORT", "5433"),
                ("SNIPDROP_DB_USER", "snip"),
                ("SNIPDROP_DB_PASSWORD", "hunter2"),
                ("SNIPDROP_DB_NAME", "snippets"),
                ("SNIPDROP_AUTH_ISSUER", "tenant.auth.example.com"),
                ("SNIPDROP_AUTH_AUDIENCE", "https://api.example.com"),
                ("SNIPDROP_AUTH_CLIENT_ID", "client-abc"),
            ],
            || {
                let config = load_from_env().unwrap();
                assert_eq!(config.port, 9090);
                assert_eq!(config.database.host, "db.internal");
                assert_eq!(config.database.port, 5433);
                assert_eq!(config.database.user, "snip");
                assert_eq!(config.database.password, "hunter2");
                assert_eq!(config.database.dbname, "snippets");
                assert_eq!(config.auth.client_id.as_deref(), Some("client-abc"));
            },
        );
    }

    #[test]
    fn config_bare_domain_becomes_https_issuer() {
        with_env_vars(REQUIRED, || {
            let config = load_from_env().unwrap();
            assert_eq!(config.auth.issuer, "https://tenant.auth.example.com/");
        });
    }

    #[test]
    fn config_full_url_issuer_keeps_scheme() {
        with_env_vars(
            &[
                ("SNIPDROP_AUTH_ISSUER", "http://127.0.0.1:4545"),
                ("SNIPDROP_AUTH_AUDIENCE", "api"),
            ],
            || {
                let config = load_from_env().unwrap();
                assert_eq!(config.auth.issuer, "http://127.0.0.1:4545/");
            },
        );
    }

    #[test]
    fn config_issuer_trailing_slash_not_doubled() {
        with_env_vars(
            &[
                ("SNIPDROP_AUTH_ISSUER", "https://tenant.auth.example.com/"),
                ("SNIPDROP_AUTH_AUDIENCE", "api"),
            ],
            || {
                let config = load_from_env().unwrap();
                assert_eq!(config.auth.issuer, "https://tenant.auth.example.com/");
            },
        );
    }

    #[test]
    fn config_missing_issuer_fails() {
        with_env_vars(&[("SNIPDROP_AUTH_AUDIENCE", "api")], || {
            let err = load_from_env().unwrap_err();
            assert!(err.to_string().contains("SNIPDROP_AUTH_ISSUER"));
        });
    }

    #[test]
    fn config_missing_audience_fails() {
        with_env_vars(&[("SNIPDROP_AUTH_ISSUER", "issuer.example.com")], || {
            let err = load_from_env().unwrap_err();
            assert!(err.to_string().contains("SNIPDROP_AUTH_AUDIENCE"));
        });
    }

    #[test]
    fn config_rejects_non_numeric_port() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SNIPDROP_PORT", "not-a-port"));
        with_env_vars(&vars, || {
            let err = load_from_env().unwrap_err();
            assert!(err.to_string().contains("SNIPDROP_PORT"));
        });
    }

    #[test]
    fn config_reads_dotenv_file() {
        with_env_vars(REQUIRED, || {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join(".env");
            std::fs::write(&path, "SNIPDROP_PORT=9191\n").unwrap();
            dotenvy::from_path(&path).unwrap();

            let config = load_from_env().unwrap();
            assert_eq!(config.port, 9191);
        });
    }
}
