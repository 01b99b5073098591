// SPDX-License-Identifier: MPL-2.0
//! One-shot reveal animations.
//!
//! A [`RevealTarget`] becomes revealed the first time at least
//! [`VISIBILITY_THRESHOLD`] of its height intersects the viewport, with the
//! viewport's bottom edge pulled up by [`BOTTOM_MARGIN`]. Revealed targets
//! never hide again. Each target carries a stagger delay so a group of cards
//! animates in sequence.

use std::time::{Duration, Instant};

/// Fraction of a target that must be visible before it reveals.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;
/// Pixels trimmed from the bottom of the viewport for intersection checks.
pub const BOTTOM_MARGIN: u32 = 50;
/// Delay added per position inside a staggered group.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);
/// Length of the reveal transition.
pub const TRANSITION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    FadeIn,
    SlideInLeft,
    SlideInRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub id: String,
    pub kind: RevealKind,
    pub top: u32,
    pub height: u32,
    pub delay: Duration,
}

impl RevealTarget {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: RevealKind, top: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            kind,
            top,
            height,
            delay: Duration::ZERO,
        }
    }

    /// Returns whether enough of the target is inside `[view_top, view_bottom)`.
    #[must_use]
    pub fn intersects(&self, view_top: u32, view_bottom: u32) -> bool {
        if view_bottom <= view_top {
            return false;
        }
        let bottom = self.top.saturating_add(self.height);
        if self.height == 0 {
            return self.top >= view_top && self.top < view_bottom;
        }
        let overlap = bottom.min(view_bottom).saturating_sub(self.top.max(view_top));
        overlap as f32 / self.height as f32 >= VISIBILITY_THRESHOLD
    }
}

/// Assigns increasing stagger delays to a group, in order.
pub fn stagger(targets: &mut [RevealTarget]) {
    for (index, target) in targets.iter_mut().enumerate() {
        target.delay = STAGGER_STEP * index as u32;
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    targets: Vec<RevealTarget>,
    revealed_at: Vec<Option<Instant>>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(targets: Vec<RevealTarget>) -> Self {
        let revealed_at = vec![None; targets.len()];
        Self {
            targets,
            revealed_at,
        }
    }

    /// Reveals every target that now intersects the viewport.
    ///
    /// Returns the ids revealed by this call.
    pub fn observe(&mut self, offset_y: u32, viewport_height: u32, now: Instant) -> Vec<&str> {
        let view_bottom = offset_y
            .saturating_add(viewport_height)
            .saturating_sub(BOTTOM_MARGIN);
        let mut newly = Vec::new();
        for (target, revealed) in self.targets.iter().zip(self.revealed_at.iter_mut()) {
            if revealed.is_none() && target.intersects(offset_y, view_bottom) {
                *revealed = Some(now);
                newly.push(target.id.as_str());
            }
        }
        newly
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.position(id)
            .is_some_and(|index| self.revealed_at[index].is_some())
    }

    /// Transition progress in `0.0..=1.0`, honoring the target's delay.
    #[must_use]
    pub fn progress(&self, id: &str, now: Instant) -> f32 {
        let Some(index) = self.position(id) else {
            // Unknown ids render as fully shown.
            return 1.0;
        };
        let Some(revealed_at) = self.revealed_at[index] else {
            return 0.0;
        };
        let start = revealed_at + self.targets[index].delay;
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0)
    }

    /// Returns whether any revealed target is still mid-transition.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.targets
            .iter()
            .zip(&self.revealed_at)
            .any(|(target, revealed)| {
                revealed.is_some_and(|at| now < at + target.delay + TRANSITION)
            })
    }

    #[must_use]
    pub fn kind(&self, id: &str) -> Option<RevealKind> {
        self.position(id).map(|index| self.targets[index].kind)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.targets.iter().position(|target| target.id == id)
    }
}

/// Staggered pulse highlight on skill tags, played once after activation.
#[derive(Debug, Clone)]
pub struct SkillPulse {
    count: usize,
    started_at: Option<Instant>,
}

impl SkillPulse {
    /// Delay between page activation and the first pulse.
    pub const ACTIVATION_DELAY: Duration = Duration::from_millis(500);
    /// How long each tag pulses.
    pub const DURATION: Duration = Duration::from_millis(2000);

    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            started_at: None,
        }
    }

    /// Starts the pulse sequence; later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now + Self::ACTIVATION_DELAY);
        }
    }

    #[must_use]
    pub fn is_pulsing(&self, index: usize, now: Instant) -> bool {
        let Some(start) = self.started_at else {
            return false;
        };
        if index >= self.count {
            return false;
        }
        let from = start + STAGGER_STEP * index as u32;
        now >= from && now < from + Self::DURATION
    }

    /// Returns whether any tag is waiting to pulse or still pulsing.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        let Some(start) = self.started_at else {
            return false;
        };
        let last = start + STAGGER_STEP * self.count.saturating_sub(1) as u32 + Self::DURATION;
        self.count > 0 && now < last
    }
}
