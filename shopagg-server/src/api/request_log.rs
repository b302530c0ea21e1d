//! Request logging middleware
//!
//! Every request runs inside a `request` span carrying the client IP, the
//! requested path (`event`) and the user agent, so handler logs are tagged
//! with the request they belong to.

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::{debug, info, info_span, Instrument};

const UNKNOWN_CLIENT: &str = "-";

/// Resolve the originating client address
///
/// Order: first `X-Forwarded-For` entry, then `X-Real-IP`, then the socket
/// peer, then `-`.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
    };

    if let Some(forwarded) = header_value("x-forwarded-for") {
        return forwarded
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
    }

    if let Some(real_ip) = header_value("x-real-ip") {
        return real_ip.to_string();
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Wrap each request in a span and log its arrival and completion
pub async fn log_requests(request: Request, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let ip = client_ip(request.headers(), peer);
    let event = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let span = info_span!("request", ip = %ip, event = %event, user_agent = %user_agent);

    async move {
        info!("Request incoming");
        let response = next.run(request).await;
        debug!(status = response.status().as_u16(), "Request completed");
        response
    }
    .instrument(span)
    .await
}
