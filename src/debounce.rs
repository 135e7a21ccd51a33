//! Debounced trigger for search-as-you-type filtering
//!
//! A burst of `trigger()` calls is coalesced into a single firing that happens
//! once the input has been quiet for the configured delay. Every call within
//! the quiet period pushes the deadline back.
//!
//! This is a pure data structure with no timers of its own. The event loop
//! calls `trigger()` on each keystroke and `poll()` on each tick, passing in
//! the current time, and uses `deadline()` to size its poll timeout.

use std::time::{Duration, Instant};

/// Default quiet period before a filter request fires
pub const DEFAULT_THROTTLE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    /// At most one pending deadline exists at a time
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period in milliseconds.
    ///
    /// A delay of zero makes the debouncer synchronous: `trigger()` asks the
    /// caller to fire immediately on every call.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    pub fn is_synchronous(&self) -> bool {
        self.delay.is_zero()
    }

    /// Register a request.
    ///
    /// Returns true when the caller should fire right away (synchronous mode).
    /// Otherwise the pending deadline is replaced with `now + delay`.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.is_synchronous() {
            return true;
        }
        self.deadline = Some(now + self.delay);
        false
    }

    /// Returns true exactly once when the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS)
    }
}
