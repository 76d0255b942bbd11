//! Rate limiting middleware using token bucket algorithm.

use anyhow::Context;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-client rate limiter.
///
/// # Arguments
///
/// - `per_second` - interval in seconds after which one request is replenished
/// - `burst` - number of requests a client may send back to back
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the socket
/// peer address, so the server must be served with connect info.
///
/// # Errors
///
/// Returns an error if either value is zero.
pub fn layer(
    per_second: u64,
    burst: u32,
) -> anyhow::Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}
