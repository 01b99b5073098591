// SPDX-License-Identifier: MPL-2.0
//! Eased scroll animation toward a target offset.

use std::time::{Duration, Instant};

/// How long an anchor scroll takes to settle.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f32, to: u32, now: Instant) -> Self {
        Self {
            from: from.max(0.0),
            to: to as f32,
            started_at: now,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset to show at `now`, following an ease-out cubic curve.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / DEFAULT_DURATION.as_secs_f32()).min(1.0)
    }
}
