#![allow(dead_code)]

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant except `Internal` is an expected, user-facing outcome. The
/// bodies are plain text and clients match on them verbatim, so the wording
/// here is part of the API contract.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field or body was missing, empty, or the wrong type.
    #[error("Bad Request: {0}")]
    InvalidInput(&'static str),

    /// An email was present but not a plausible `local@domain.tld` address.
    #[error("Bad Request: Invalid email format")]
    InvalidFormat,

    /// Missing, malformed, or unknown bearer token.
    #[error("Unauthorized: {0}")]
    Unauthenticated(&'static str),

    /// The request would push the token past its daily word quota.
    #[error("Payment Required")]
    QuotaExceeded,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput(_) | AppError::InvalidFormat => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::QuotaExceeded => (StatusCode::PAYMENT_REQUIRED, self.to_string()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, [(header::CONTENT_TYPE, "text/plain")], message).into_response()
    }
}
