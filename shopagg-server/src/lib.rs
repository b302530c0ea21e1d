//! shopagg-server library - Shop listing aggregator
//!
//! Fetches shop listings from SAS OnlineShopping (JSON API) and Trumf
//! Netthandel (scraped HTML), joins them by name and serves the result at `/`.

use axum::Router;
use shopagg_common::config::UpstreamConfig;
use shopagg_common::http_client::build_upstream_client;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod assemble;
pub mod error;
pub mod fetch;
pub mod merge;

pub use crate::error::{ApiError, ApiResult, FetchError};
use crate::merge::ShopLinks;

/// Application state shared across HTTP handlers
///
/// Read-only: nothing here changes between requests.
#[derive(Clone)]
pub struct AppState {
    /// Outbound client for both upstream fetches
    pub client: reqwest::Client,
    /// Upstream endpoints
    pub upstream: Arc<UpstreamConfig>,
    /// Link bases for extension URLs
    pub links: Arc<ShopLinks>,
}

impl AppState {
    /// Create application state from an existing client
    pub fn new(client: reqwest::Client, upstream: UpstreamConfig) -> Self {
        let links = ShopLinks::from_upstream(&upstream);
        Self {
            client,
            upstream: Arc::new(upstream),
            links: Arc::new(links),
        }
    }

    /// Build the outbound client from configuration and create state
    pub fn from_config(upstream: UpstreamConfig) -> shopagg_common::Result<Self> {
        let client = build_upstream_client(&upstream)?;
        Ok(Self::new(client, upstream))
    }
}

/// Startup line identifying this binary
pub fn build_banner() -> String {
    format!(
        "shopagg-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    )
}

/// Build application router
///
/// `/` runs the fetch-merge pipeline; `/ping` and `/health` never touch
/// upstream.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::get;

    Router::new()
        .route("/", get(api::list_shops))
        .merge(api::health_routes())
        .layer(middleware::from_fn(api::log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_banner_identifies_build() {
        let banner = build_banner();
        assert!(banner.starts_with(&format!("shopagg-server v{} [", env!("CARGO_PKG_VERSION"))));
        assert!(!env!("GIT_HASH").is_empty());
        assert!(banner.contains(env!("GIT_HASH")));
        assert!(banner.contains(env!("BUILD_PROFILE")));
    }
}
