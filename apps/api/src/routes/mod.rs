pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::justify::handlers::handle_justify;
use crate::state::AppState;
use crate::tokens::handlers::handle_token;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/token", post(handle_token))
        .route("/api/justify", post(handle_justify))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Router-level tests: full request/response cycles via tower::oneshot
// ────────────────────────────────────────────────────────────────────────────
