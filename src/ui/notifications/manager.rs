// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns at most one toast. Emitting a new one replaces whatever
//! is on screen; the replaced toast is dropped without a slide-out.

use super::notification::{Kind, Notification, NotificationId, Phase, Timing};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the single visible notification.
#[derive(Debug, Default)]
pub struct Manager {
    visible: Option<Notification>,
    timing: Timing,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timing(timing: Timing) -> Self {
        Self {
            visible: None,
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Displays `notification`, clearing any toast already shown.
    pub fn emit(&mut self, notification: Notification) {
        if let Some(previous) = self.visible.take() {
            tracing::debug!(id = ?previous.id(), "replacing toast");
        }
        match notification.kind() {
            Kind::Error => tracing::warn!(key = notification.message_key(), "error toast"),
            Kind::Success | Kind::Info => {
                tracing::info!(key = notification.message_key(), "toast emitted");
            }
        }
        self.visible = Some(notification);
    }

    /// Starts the slide-out of the toast with this ID.
    ///
    /// Returns `true` if the toast was found and was not already leaving.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        match self.visible.as_mut() {
            Some(notification) if notification.id() == id => {
                let started = notification.begin_leaving(now);
                if started {
                    tracing::debug!(?id, "toast dismissed");
                }
                started
            }
            _ => false,
        }
    }

    /// Expires the toast once its display time is up and detaches it once
    /// the slide-out has finished.
    pub fn tick(&mut self, now: Instant) {
        let Some(notification) = self.visible.as_mut() else {
            return;
        };
        if notification.is_expired(now, &self.timing) {
            notification.begin_leaving(now.min(notification.created_at() + self.timing.display));
        }
        if notification.phase(now, &self.timing) == Phase::Detached {
            self.visible = None;
        }
    }

    /// Returns the currently visible notification.
    #[must_use]
    pub fn visible(&self) -> Option<&Notification> {
        self.visible.as_ref()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.visible.is_some()
    }
}
