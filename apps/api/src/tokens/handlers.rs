use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tokens::store::validate_email;

/// Loosely-typed token request body. `email` is kept as a raw JSON value so
/// a missing field, a non-string field, and an unparseable body all collapse
/// into the same required-field error instead of a framework reject.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    email: Value,
}

/// POST /api/token
pub async fn handle_token(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request: TokenRequest =
        serde_json::from_slice(&body).unwrap_or(TokenRequest { email: Value::Null });

    let Some(email) = request.email.as_str() else {
        return Err(AppError::InvalidInput("Email is required"));
    };
    validate_email(email)?;

    let token = state.tokens.get_or_create(email);
    Ok(([(header::CONTENT_TYPE, "text/plain")], token).into_response())
}
