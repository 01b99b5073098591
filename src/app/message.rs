// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    Notification(notifications::NotificationMessage),
    WindowResized(iced::Size),
    /// The user turned the wheel; interrupts an anchor scroll in flight.
    WheelScrolled,
    /// Periodic tick driving timers and animations.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
