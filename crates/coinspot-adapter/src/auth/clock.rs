/*
[INPUT]:  Wall-clock time or a test-controlled instant
[OUTPUT]: Nonce values (Unix seconds) for signed requests
[POS]:    Auth layer - replay-protection nonce source
[UPDATE]: When the exchange changes its nonce resolution
*/

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Source of request nonces.
///
/// Two calls within the same second share a nonce; the exchange decides
/// whether to reject the replay.
pub trait NonceClock: Send + Sync + Debug {
    /// Current Unix time in seconds
    fn now(&self) -> u64;
}

/// Wall-clock nonce source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl NonceClock for SystemClock {
    fn now(&self) -> u64 {
        Utc::now().timestamp().max(0) as u64
    }
}

/// Manually driven nonce source for deterministic tests and replays
#[derive(Debug, Default)]
pub struct FixedClock {
    secs: AtomicU64,
}

impl FixedClock {
    pub fn new(secs: u64) -> Self {
        Self {
            secs: AtomicU64::new(secs),
        }
    }

    pub fn set(&self, secs: u64) {
        self.secs.store(secs, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: u64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl NonceClock for FixedClock {
    fn now(&self) -> u64 {
        self.secs.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_unix_seconds() {
        let now = SystemClock.now();
        // 2020-01-01 and 2100-01-01; catches a milliseconds mix-up
        assert!(now > 1_577_836_800);
        assert!(now < 4_102_444_800);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(1_700_000_000);
        assert_eq!(clock.now(), 1_700_000_000);
        clock.advance(5);
        assert_eq!(clock.now(), 1_700_000_005);
        clock.set(42);
        assert_eq!(clock.now(), 42);
    }
}
