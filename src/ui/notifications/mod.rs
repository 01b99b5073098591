// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! At most one toast is attached at a time. Emitting a new toast clears the
//! current one. A toast slides in shortly after creation, stays for a fixed
//! duration unless closed, then slides out and is detached.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, kinds and lifecycle timing
//! - [`manager`] - `Manager` owning the single visible toast
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.emit(Notification::success("notification-contact-success", now));
//!
//! // In the view function
//! let overlay = Toast::view_overlay(&manager, &i18n, now).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    Kind, Notification, NotificationId, Phase, Timing, DEFAULT_DISPLAY_DURATION,
    DEFAULT_SLIDE_DURATION, DEFAULT_SLIDE_IN_DELAY,
};
pub use toast::Toast;
