//! Per-token daily word accounting.
//!
//! Records are kept for every token ever seen; there is no eviction. Expired
//! windows are detected lazily on the next access, so a stale record simply
//! sits in the map until its token sends another request.

pub mod store;

pub use store::{RateLimitRecord, RateLimitStore, DAILY_WORD_LIMIT, WINDOW_MS};
