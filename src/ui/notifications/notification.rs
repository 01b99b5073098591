// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification moves through a fixed lifecycle measured from its creation
//! time: it waits off screen, slides in, stays, slides out, and is detached.

use std::time::{Duration, Instant};

/// Delay between creation and the start of the slide-in.
pub const DEFAULT_SLIDE_IN_DELAY: Duration = Duration::from_millis(100);
/// How long a toast stays before it starts leaving on its own.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(5);
/// Length of the slide transition, both in and out.
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind determines the toast's accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Error,
}

/// Lifecycle timing shared by every toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub slide_in_delay: Duration,
    pub display: Duration,
    pub slide: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            slide_in_delay: DEFAULT_SLIDE_IN_DELAY,
            display: DEFAULT_DISPLAY_DURATION,
            slide: DEFAULT_SLIDE_DURATION,
        }
    }
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached but still off screen.
    Entering,
    /// Sliding in or fully shown.
    Shown,
    /// Sliding out after dismissal or expiry.
    Leaving,
    /// Slide-out finished; ready to be removed.
    Detached,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
    leaving_since: Option<Instant>,
}

impl Notification {
    /// Creates a new notification with the given kind and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(kind: Kind, message_key: impl Into<String>, now: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: now,
            leaving_since: None,
        }
    }

    pub fn info(message_key: impl Into<String>, now: Instant) -> Self {
        Self::new(Kind::Info, message_key, now)
    }

    pub fn success(message_key: impl Into<String>, now: Instant) -> Self {
        Self::new(Kind::Success, message_key, now)
    }

    pub fn error(message_key: impl Into<String>, now: Instant) -> Self {
        Self::new(Kind::Error, message_key, now)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Starts the slide-out. Returns `false` if it was already leaving.
    pub fn begin_leaving(&mut self, now: Instant) -> bool {
        if self.leaving_since.is_some() {
            return false;
        }
        self.leaving_since = Some(now);
        true
    }

    #[must_use]
    pub fn phase(&self, now: Instant, timing: &Timing) -> Phase {
        match self.leaving_since {
            Some(since) if now >= since + timing.slide => Phase::Detached,
            Some(_) => Phase::Leaving,
            None if now < self.created_at + timing.slide_in_delay => Phase::Entering,
            None => Phase::Shown,
        }
    }

    /// Returns whether the display time is up and the toast should leave.
    #[must_use]
    pub fn is_expired(&self, now: Instant, timing: &Timing) -> bool {
        self.leaving_since.is_none() && now >= self.created_at + timing.display
    }

    /// How far on screen the toast is, from `0.0` (off) to `1.0` (fully in).
    #[must_use]
    pub fn slide_progress(&self, now: Instant, timing: &Timing) -> f32 {
        let fraction = |elapsed: Duration| {
            if timing.slide.is_zero() {
                1.0
            } else {
                (elapsed.as_secs_f32() / timing.slide.as_secs_f32()).min(1.0)
            }
        };
        match self.phase(now, timing) {
            Phase::Entering | Phase::Detached => 0.0,
            Phase::Shown => {
                let since = self.created_at + timing.slide_in_delay;
                fraction(now.saturating_duration_since(since))
            }
            Phase::Leaving => {
                let since = self.leaving_since.unwrap_or(now);
                1.0 - fraction(now.saturating_duration_since(since))
            }
        }
    }
}
