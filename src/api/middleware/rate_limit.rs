//! Rate limiting middleware using token bucket algorithm.

use std::sync::Arc;

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a rate limiter for lead submissions.
///
/// # Limits
///
/// - **Rate**: 1 request every 6 seconds
/// - **Burst**: 5 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let leads = Router::new()
///     .route("/leads", post(create_lead_handler))
///     .layer(rate_limit::lead_layer());
/// ```
pub fn lead_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(6)
            .burst_size(5)
            .finish()
            .expect("lead rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
