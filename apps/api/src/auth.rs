use axum::http::{header, HeaderMap};

use crate::errors::AppError;
use crate::tokens::TokenStore;

/// Extracts and verifies the bearer token for a justify request.
///
/// Checks, in order: header present, `Bearer <token>` shape, token known to
/// the store. Returns the token on success so the caller can key rate-limit
/// records by it.
pub fn authenticate(headers: &HeaderMap, tokens: &TokenStore) -> Result<String, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::Unauthenticated("No token provided"))?;
    let value = value
        .to_str()
        .map_err(|_| AppError::Unauthenticated("Invalid token format"))?;

    let mut parts = value.split(' ');
    let token = match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => token,
        _ => return Err(AppError::Unauthenticated("Invalid token format")),
    };

    if !tokens.contains_token(token) {
        return Err(AppError::Unauthenticated("Invalid token"));
    }

    Ok(token.to_string())
}
