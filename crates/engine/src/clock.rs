//! Monotonic clock abstraction for access timestamps.
//!
//! Access recency is tracked as milliseconds on a session-relative monotonic
//! clock. The trait seam lets tests drive time explicitly while production
//! code reads the host monotonic clock.

use std::time::Instant;

/// Source of monotonic timestamps for access bookkeeping.
///
/// Readings are in milliseconds since an implementation-defined origin and
/// must never decrease. A reading of `0` is reserved for "never used".
pub trait Clock: Send {
    /// Returns the current monotonic reading in milliseconds.
    fn now_ms(&mut self) -> u64;
}

/// Production clock anchored at session start.
///
/// Readings are strictly increasing: two consecutive calls never return the
/// same value even within one host millisecond, so recency order over
/// accesses is always total and eviction order never depends on host timer
/// resolution.
#[derive(Debug)]
pub struct SessionClock {
    origin: Instant,
    last: u64,
}

impl SessionClock {
    /// Creates a clock anchored at the current instant.
    ///
    /// The first reading is at least 1, keeping `0` free as the
    /// "never used" sentinel.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            last: 0,
        }
    }
}

impl Default for SessionClock {
    /// Returns the default value.
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SessionClock {
    fn now_ms(&mut self) -> u64 {
        let elapsed = u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX - 1);
        self.last = elapsed.max(self.last.saturating_add(1));
        self.last
    }
}
