//! Clock seam for the rate-limit window logic.
//!
//! Production uses [`SystemClock`]; tests swap in `ManualClock` so window
//! expiry can be exercised without sleeping through 24 hours.

use chrono::Utc;

/// Millisecond wall clock.
pub trait Clock: Send + Sync {
    /// Current Unix time in milliseconds.
    fn now_ms(&self) -> i64;
}

/// System clock reading `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
pub mod test_support {
    use super::Clock;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Controllable clock for window-expiry tests.
    #[derive(Debug, Default)]
    pub struct ManualClock {
        ms: AtomicI64,
    }

    impl ManualClock {
        pub fn at(ms: i64) -> Self {
            Self {
                ms: AtomicI64::new(ms),
            }
        }

        pub fn advance(&self, delta_ms: i64) {
            self.ms.fetch_add(delta_ms, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> i64 {
            self.ms.load(Ordering::SeqCst)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::ManualClock;

    #[test]
    fn test_system_clock_returns_epoch_millis() {
        let clock = SystemClock::new();
        let t1 = clock.now_ms();
        let t2 = clock.now_ms();
        assert!(t1 > 0);
        assert!(t2 >= t1);
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::at(1_000);
        assert_eq!(clock.now_ms(), 1_000);
        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);
    }
}
