//! PostgreSQL connection pool bootstrap.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use snipdrop_types::config::DatabaseConfig;

/// Connect to PostgreSQL with up to 8 pooled connections.
///
/// A connection failure here aborts startup; there is no lazy or retried
/// connect. Request handlers borrow connections from this pool and never
/// hold application-level locks around them.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.dbname);

    let pool = PgPoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        dbname = %config.dbname,
        "connected to postgres"
    );

    Ok(pool)
}
