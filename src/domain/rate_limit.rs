// SPDX-License-Identifier: MPL-2.0
//! Trailing-call rate limiting.
//!
//! [`RateLimiter`] collapses a burst of values into a single trailing value.
//! It knows nothing about what the values mean; the scroll reactor feeds it
//! offsets, but any `T` works.
//!
//! The delivery deadline is fixed by the first value of a burst, so a
//! continuous stream still yields one value per interval. The value delivered
//! is always the most recent one pushed.

use std::time::{Duration, Instant};

/// Collapses rapid values into one trailing delivery.
#[derive(Debug, Clone)]
pub struct RateLimiter<T> {
    interval: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> RateLimiter<T> {
    /// Creates a limiter delivering at most once per `interval`.
    #[must_use]
    pub fn throttle(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            deadline: None,
        }
    }

    /// Records a new value, replacing any value still waiting.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// Returns the waiting value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Delivers the waiting value immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.deadline = None;
        self.pending.take()
    }

    /// Returns whether a value is waiting for delivery.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
