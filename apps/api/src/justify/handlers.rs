use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::warn;

use crate::auth::authenticate;
use crate::errors::AppError;
use crate::justify::tokenizer::tokenize;
use crate::justify::{justify_text, DEFAULT_LINE_WIDTH};
use crate::state::AppState;

/// Justify request body, classified before the engine is reached.
///
/// The wire format is raw `text/plain`, so the body arrives as opaque bytes.
/// Anything that is not non-blank UTF-8 text is turned away at this boundary
/// and the engine only ever sees valid text.
#[derive(Debug, PartialEq, Eq)]
pub enum TextPayload {
    Valid(String),
    Blank,
    NotText,
}

impl TextPayload {
    pub fn classify(body: &Bytes) -> Self {
        match std::str::from_utf8(body) {
            Ok(text) if text.trim().is_empty() => TextPayload::Blank,
            Ok(text) => TextPayload::Valid(text.to_string()),
            Err(_) => TextPayload::NotText,
        }
    }
}

/// POST /api/justify
///
/// The order mirrors the admission contract: authenticate, count words, check
/// the quota, justify, then record usage. The check and the record are two
/// separate store calls, so two in-flight requests for the same token can
/// both pass the check; the overshoot is bounded by one request's words.
pub async fn handle_justify(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let token = authenticate(&headers, &state.tokens)?;

    let text = match TextPayload::classify(&body) {
        TextPayload::Valid(text) => text,
        TextPayload::Blank | TextPayload::NotText => {
            return Err(AppError::InvalidInput("Text is required"));
        }
    };

    let requested = tokenize(&text).len() as u64;

    if !state.rate_limits.is_allowed(&token, requested) {
        warn!(requested, "daily word quota exceeded");
        return Err(AppError::QuotaExceeded);
    }

    let justified = justify_text(&text, DEFAULT_LINE_WIDTH)?;
    state.rate_limits.record_usage(&token, requested);

    Ok(([(header::CONTENT_TYPE, "text/plain")], justified).into_response())
}
