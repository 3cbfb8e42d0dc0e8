//! Axum router configuration with middleware.
//!
//! Routes:
//! - `GET  /ping`           liveness, no auth
//! - `GET  /snippets`       list with paging/search/sort, no auth
//! - `POST /snippets`       store a snippet, bearer token required
//! - `GET  /snippets/{id}`  fetch one, no auth
//! - `DELETE /snippets/{id}` remove one, no auth
//!
//! Middleware: CORS open to any origin, request tracing.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use snipdrop_core::repository::SnippetRepository;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router<R: SnippetRepository + 'static>(state: AppState<R>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(ping))
        .route(
            "/snippets",
            get(handlers::snippet::list_snippets::<R>)
                .post(handlers::snippet::create_snippet::<R>),
        )
        .route(
            "/snippets/{id}",
            get(handlers::snippet::get_snippet::<R>)
                .delete(handlers::snippet::delete_snippet::<R>),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /ping - Simple liveness check (no auth required).
async fn ping() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "message": "pong" }))
}
