//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Creates a rate limiter for the page creation endpoint.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 30 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Keys are
/// client IPs taken from the socket peer address; use [`proxied_layer`]
/// when the service sits behind a reverse proxy.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(30)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Same limits as [`layer`], keyed by forwarded client IP.
///
/// Trusts `X-Forwarded-For` / `Forwarded` headers, so only enable this when
/// a proxy in front strips client-supplied values (`BEHIND_PROXY=true`).
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(30)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
