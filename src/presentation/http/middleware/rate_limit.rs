// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const REQUESTS_PER_SECOND: u64 = 10;
const BURST_SIZE: u32 = 20;

type BlogGovernorLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limit for the public pages. The key is the forwarded client
/// address when a proxy supplies one, otherwise the peer address, so the
/// server must be started with connect info.
pub fn rate_limit_layer() -> BlogGovernorLayer {
    static RATE_LIMITER: OnceLock<BlogGovernorLayer> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("non-zero rate limit constants");

            GovernorLayer::new(config)
        })
        .clone()
}
