// SPDX-License-Identifier: MPL-2.0
//! Domain layer - page behavior with no GUI dependencies.
//!
//! Every type here is driven by explicit [`Instant`](std::time::Instant)
//! timestamps and never reads the clock on its own, so the whole layer can be
//! exercised with a [`ManualClock`](clock::ManualClock). Nothing in this
//! module depends on `iced`; the only external crates are `regex` for email
//! validation and `thiserror` for the validation error type.
//!
//! # Modules
//!
//! - [`clock`]: Time source ([`Clock`](clock::Clock), [`ManualClock`](clock::ManualClock))
//! - [`contact`]: Contact form validation and simulated submission
//! - [`navigation`]: Mobile menu state ([`MenuState`](navigation::MenuState))
//! - [`rate_limit`]: Generic trailing rate limiter
//! - [`reveal`]: One-shot reveal animations and the skill pulse
//! - [`scroll`]: Pure scroll-derived state (navbar, active section, back-to-top)
//! - [`smooth_scroll`]: Eased animation toward an anchor offset
//! - [`typewriter`]: Hero heading typewriter sequencer

pub mod clock;
pub mod contact;
pub mod navigation;
pub mod rate_limit;
pub mod reveal;
pub mod scroll;
pub mod smooth_scroll;
pub mod typewriter;
