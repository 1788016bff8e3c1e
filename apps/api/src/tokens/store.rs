use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::errors::AppError;

/// Email-to-token issuance store.
///
/// One opaque token per email, minted on first request and returned verbatim
/// on every later one. Entries are never deleted.
#[derive(Debug, Default)]
pub struct TokenStore {
    by_email: Mutex<HashMap<String, String>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the token for `email`, minting and storing a fresh random v4
    /// UUID on first sight. Idempotent per email.
    pub fn get_or_create(&self, email: &str) -> String {
        self.lock()
            .entry(email.to_string())
            .or_insert_with(|| Uuid::new_v4().to_string())
            .clone()
    }

    /// Whether `token` was issued by this store.
    ///
    /// Linear scan: the map is keyed by email, and the token population is
    /// one entry per distinct email seen.
    pub fn contains_token(&self, token: &str) -> bool {
        self.lock().values().any(|stored| stored == token)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock means another request panicked mid-update; the map
        // itself is still consistent, so recover it instead of panicking.
        self.by_email.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Validates the `local@domain.tld` shape: ASCII, no embedded whitespace,
/// exactly one `@` with a non-empty local part, and a domain containing at
/// least one `.` with non-empty segments on both sides of the last dot.
///
/// An empty email is a missing input, not a malformed one, and reports the
/// required-field error.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::InvalidInput("Email is required"));
    }
    if !email.is_ascii() || email.chars().any(|c| c.is_whitespace()) {
        return Err(AppError::InvalidFormat);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(AppError::InvalidFormat);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(AppError::InvalidFormat);
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(AppError::InvalidFormat);
    };
    if host.is_empty() || tld.is_empty() {
        return Err(AppError::InvalidFormat);
    }

    Ok(())
}
