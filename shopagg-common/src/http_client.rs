//! Outbound HTTP client construction

use crate::config::UpstreamConfig;
use crate::Result;
use tracing::warn;

const USER_AGENT: &str = concat!("shopagg/", env!("CARGO_PKG_VERSION"));

/// Build the client used for both upstream fetches
///
/// No request timeout is configured: a stalled upstream stalls the request.
/// Certificate verification follows `upstream.accept_invalid_certs`.
pub fn build_upstream_client(upstream: &UpstreamConfig) -> Result<reqwest::Client> {
    if upstream.accept_invalid_certs {
        warn!("TLS certificate verification is DISABLED for upstream requests");
    }

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(upstream.accept_invalid_certs)
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_and_without_verification() {
        let mut upstream = UpstreamConfig::default();
        assert!(build_upstream_client(&upstream).is_ok());

        upstream.accept_invalid_certs = false;
        assert!(build_upstream_client(&upstream).is_ok());
    }
}
