use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::Clock;

/// Words a single token may consume within one window.
pub const DAILY_WORD_LIMIT: u64 = 80_000;

/// Window length: 24 hours, rolling from the first use in the window rather
/// than wall-clock midnight.
pub const WINDOW_MS: i64 = 86_400_000;

/// Usage accumulated by one token since its window began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitRecord {
    pub word_count: u64,
    /// When the current window began. Only ever moves forward.
    pub last_reset_ms: i64,
}

/// Per-token rolling word counters with lazy daily reset.
///
/// `is_allowed` and `record_usage` are deliberately two separate calls: the
/// check never mutates, and usage is recorded only after the work is done.
/// Two concurrent requests on the same token can therefore both pass the
/// check before either records, overshooting the cap by at most one request's
/// words. That window is inherent to the admission contract, not a bug here.
pub struct RateLimitStore {
    records: Mutex<HashMap<String, RateLimitRecord>>,
    clock: Arc<dyn Clock>,
    daily_limit: u64,
}

impl RateLimitStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_limit(clock, DAILY_WORD_LIMIT)
    }

    /// Store with a custom daily limit. Production uses [`DAILY_WORD_LIMIT`];
    /// tests shrink it.
    pub fn with_limit(clock: Arc<dyn Clock>, daily_limit: u64) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            clock,
            daily_limit,
        }
    }

    /// Pure admission predicate: may `token` spend `words` more words now?
    ///
    /// An unseen token is always admitted. An expired window also always
    /// admits, whatever the request size — the next `record_usage` starts a
    /// fresh window, so this is reset-then-admit, not cap-per-request.
    pub fn is_allowed(&self, token: &str, words: u64) -> bool {
        let records = self.lock();
        let Some(record) = records.get(token) else {
            return true;
        };

        if self.clock.now_ms() - record.last_reset_ms > WINDOW_MS {
            return true;
        }

        record.word_count + words <= self.daily_limit
    }

    /// Records `words` consumed by `token`.
    ///
    /// Starts a fresh window when none exists yet or the previous one has
    /// expired; the expired counter is replaced, never added to.
    pub fn record_usage(&self, token: &str, words: u64) {
        let now = self.clock.now_ms();
        let mut records = self.lock();

        match records.get_mut(token) {
            Some(record) if now - record.last_reset_ms <= WINDOW_MS => {
                record.word_count += words;
            }
            Some(record) => {
                *record = RateLimitRecord {
                    word_count: words,
                    last_reset_ms: now,
                };
            }
            None => {
                records.insert(
                    token.to_string(),
                    RateLimitRecord {
                        word_count: words,
                        last_reset_ms: now,
                    },
                );
            }
        }
    }

    /// Snapshot of a token's current counter, if it has one.
    #[allow(dead_code)]
    pub fn usage(&self, token: &str) -> Option<RateLimitRecord> {
        self.lock().get(token).copied()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, RateLimitRecord>> {
        // A poisoned lock means another request panicked mid-update; the map
        // itself is still consistent, so recover it instead of panicking.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_support::ManualClock;

    const T0: i64 = 1_700_000_000_000;

    fn store_at(clock: &Arc<ManualClock>) -> RateLimitStore {
        RateLimitStore::new(Arc::clone(clock) as Arc<dyn Clock>)
    }

    #[test]
    fn test_unseen_token_always_allowed() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = store_at(&clock);

        assert!(store.is_allowed("tok", 1));
        assert!(store.is_allowed("tok", DAILY_WORD_LIMIT));
        assert!(store.is_allowed("tok", DAILY_WORD_LIMIT * 10));
    }

    #[test]
    fn test_first_usage_creates_record() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = store_at(&clock);

        assert!(store.is_allowed("tok", 1_000));
        store.record_usage("tok", 1_000);

        let record = store.usage("tok").expect("record should exist");
        assert_eq!(record.word_count, 1_000);
        assert_eq!(record.last_reset_ms, T0);
    }

    #[test]
    fn test_usage_accumulates_within_window() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = store_at(&clock);

        store.record_usage("tok", 300);
        clock.advance(10_000);
        store.record_usage("tok", 200);

        let record = store.usage("tok").unwrap();
        assert_eq!(record.word_count, 500);
        assert_eq!(record.last_reset_ms, T0, "window start must not move");
    }

    #[test]
    fn test_denies_request_that_would_exceed_limit() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = store_at(&clock);

        store.record_usage("tok", 79_500);
        assert!(!store.is_allowed("tok", 1_000));
        assert!(store.is_allowed("tok", 500), "exact fit must pass");
    }

    #[test]
    fn test_is_allowed_is_side_effect_free() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = store_at(&clock);

        store.record_usage("tok", 100);
        for _ in 0..5 {
            assert!(store.is_allowed("tok", 50));
        }
        assert_eq!(store.usage("tok").unwrap().word_count, 100);
    }

    #[test]
    fn test_expired_window_admits_any_request_size() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = store_at(&clock);

        store.record_usage("tok", DAILY_WORD_LIMIT);
        assert!(!store.is_allowed("tok", 1));

        clock.advance(WINDOW_MS + 1);
        assert!(store.is_allowed("tok", 1));
        // Reset-then-admit: even a request larger than the cap passes.
        assert!(store.is_allowed("tok", DAILY_WORD_LIMIT * 2));
    }

    #[test]
    fn test_record_after_expiry_replaces_counter() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = store_at(&clock);

        store.record_usage("tok", 50_000);
        clock.advance(WINDOW_MS + 1);
        store.record_usage("tok", 5);

        let record = store.usage("tok").unwrap();
        assert_eq!(record.word_count, 5, "expired counter is replaced, not added to");
        assert_eq!(record.last_reset_ms, T0 + WINDOW_MS + 1);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = store_at(&clock);

        store.record_usage("tok", 70_000);
        clock.advance(WINDOW_MS); // exactly 24h: still the same window

        assert!(!store.is_allowed("tok", 20_000));
        store.record_usage("tok", 5_000);
        let record = store.usage("tok").unwrap();
        assert_eq!(record.word_count, 75_000);
        assert_eq!(record.last_reset_ms, T0);
    }

    #[test]
    fn test_tokens_are_tracked_independently() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = store_at(&clock);

        store.record_usage("a", DAILY_WORD_LIMIT);
        assert!(!store.is_allowed("a", 1));
        assert!(store.is_allowed("b", DAILY_WORD_LIMIT));
        assert!(store.usage("b").is_none());
    }

    #[test]
    fn test_custom_limit() {
        let clock = Arc::new(ManualClock::at(T0));
        let store = RateLimitStore::with_limit(Arc::clone(&clock) as Arc<dyn Clock>, 10);

        store.record_usage("tok", 8);
        assert!(store.is_allowed("tok", 2));
        assert!(!store.is_allowed("tok", 3));
    }
}
