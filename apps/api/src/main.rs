mod auth;
mod clock;
mod config;
mod errors;
mod justify;
mod ratelimit;
mod routes;
mod state;
mod tokens;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clock::SystemClock;
use crate::config::Config;
use crate::ratelimit::RateLimitStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tokens::TokenStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a bad PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting justify API v{}", env!("CARGO_PKG_VERSION"));

    // Both stores are process-local and shared across requests.
    let state = AppState {
        tokens: Arc::new(TokenStore::new()),
        rate_limits: Arc::new(RateLimitStore::new(Arc::new(SystemClock::new()))),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
