//! Axum router configuration with middleware.
//!
//! Routes live under `/api/agent/` for compatibility with the existing
//! browser client. Middleware: permissive CORS, request tracing.

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let agent_routes = Router::new()
        .route("/chat", post(handlers::agent::chat))
        .route(
            "/session/{session_id}",
            delete(handlers::agent::clear_session),
        )
        .route("/sessions", delete(handlers::agent::clear_all_sessions));

    Router::new()
        .nest("/api/agent", agent_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
