//! Liveness endpoints
//!
//! Fixed plain-text bodies, independent of upstream state.

use axum::{routing::get, Router};

use crate::AppState;

/// GET /ping
pub async fn ping() -> &'static str {
    "pong"
}

/// GET /health
pub async fn health_check() -> &'static str {
    "I'm healthy"
}

/// Build liveness routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health_check))
}
