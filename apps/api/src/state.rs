use std::sync::Arc;

use crate::ratelimit::RateLimitStore;
use crate::tokens::TokenStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The two stores own all mutable state the service has. Handlers receive them
/// through `State` extraction; nothing reaches them as an ambient global.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenStore>,
    pub rate_limits: Arc<RateLimitStore>,
}
