//! Application state wiring the service layer to concrete infrastructure.
//!
//! AppState stays generic over the snippet repository so the HTTP layer
//! can be exercised against the in-memory store in tests; the binary
//! pins it to Postgres through [`PgAppState`].

use std::sync::Arc;

use snipdrop_core::repository::SnippetRepository;
use snipdrop_core::service::snippet::SnippetService;
use snipdrop_infra::auth::JwtVerifier;
use snipdrop_infra::postgres::pool;
use snipdrop_infra::postgres::snippet::PgSnippetRepository;
use snipdrop_types::config::AppConfig;

/// Shared application state handed to every handler.
pub struct AppState<R: SnippetRepository> {
    pub snippet_service: Arc<SnippetService<R>>,
    pub verifier: Arc<JwtVerifier>,
}

// Derived Clone would demand R: Clone; the Arcs are what actually get cloned.
impl<R: SnippetRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            snippet_service: Arc::clone(&self.snippet_service),
            verifier: Arc::clone(&self.verifier),
        }
    }
}

impl<R: SnippetRepository> AppState<R> {
    pub fn new(repository: R, verifier: JwtVerifier) -> Self {
        Self {
            snippet_service: Arc::new(SnippetService::new(repository)),
            verifier: Arc::new(verifier),
        }
    }
}

/// The state the binary runs with: snippets in Postgres.
pub type PgAppState = AppState<PgSnippetRepository>;

impl PgAppState {
    /// Connect to the database and wire the services.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = pool::connect(&config.database).await?;
        let repository = PgSnippetRepository::new(pool);
        let verifier = JwtVerifier::new(&config.auth);

        Ok(Self::new(repository, verifier))
    }
}
