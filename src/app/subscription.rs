// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Tick period while something is animating or waiting on a deadline.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window resizes and wheel turns to the app.
///
/// Wheel events are reported even when a widget captured them, since the
/// page scrollable always does.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::WheelScrolled { .. }) => Some(Message::WheelScrolled),
        _ => None,
    })
}

/// Creates a periodic tick subscription, only while something is pending.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
