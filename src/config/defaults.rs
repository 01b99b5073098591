// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Defaults mirror the constants of the domain types they configure, so a
//! missing setting behaves exactly like an unconfigured component. Each
//! setting also has bounds; values read from disk are clamped into them.
//!
//! # Categories
//!
//! - **Scroll**: Thresholds in logical pixels and the rate-limit interval
//! - **Toast**: Notification lifecycle timings
//! - **Typewriter**: Hero heading timings
//! - **Contact**: Simulated submission delay

use crate::domain::{contact, scroll, typewriter};
use crate::effects::DEFAULT_RATE_LIMIT;
use crate::ui::notifications;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Offset past which the navbar switches to its scrolled style.
pub const DEFAULT_NAVBAR_THRESHOLD: u32 = scroll::NAVBAR_SCROLLED_THRESHOLD;

/// Offset past which the back-to-top button appears.
pub const DEFAULT_BACK_TO_TOP_THRESHOLD: u32 = scroll::BACK_TO_TOP_THRESHOLD;

/// Shift applied to section tops when picking the active section.
pub const DEFAULT_SECTION_ACTIVATION_OFFSET: u32 = scroll::SECTION_ACTIVATION_OFFSET;

/// Navbar height compensation for anchor scrolling.
pub const DEFAULT_ANCHOR_OFFSET: u32 = scroll::ANCHOR_OFFSET;

/// Upper bound for every scroll threshold.
pub const MAX_SCROLL_THRESHOLD: u32 = 10_000;

/// Scroll notification rate-limit interval (milliseconds).
pub const DEFAULT_RATE_LIMIT_MS: u64 = DEFAULT_RATE_LIMIT.as_millis() as u64;
pub const MIN_RATE_LIMIT_MS: u64 = 1;
pub const MAX_RATE_LIMIT_MS: u64 = 250;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// How long a toast stays before sliding out (milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 =
    notifications::DEFAULT_DISPLAY_DURATION.as_millis() as u64;
pub const MIN_TOAST_DURATION_MS: u64 = 1_000;
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Delay between emitting a toast and its slide-in (milliseconds).
pub const DEFAULT_TOAST_SLIDE_IN_DELAY_MS: u64 =
    notifications::DEFAULT_SLIDE_IN_DELAY.as_millis() as u64;

/// Slide transition length (milliseconds).
pub const DEFAULT_TOAST_SLIDE_OUT_MS: u64 =
    notifications::DEFAULT_SLIDE_DURATION.as_millis() as u64;

/// Upper bound for toast transition timings.
pub const MAX_TOAST_TRANSITION_MS: u64 = 2_000;

// ==========================================================================
// Typewriter Defaults
// ==========================================================================

/// Delay before the first character appears (milliseconds).
pub const DEFAULT_TYPEWRITER_START_DELAY_MS: u64 =
    typewriter::DEFAULT_START_DELAY.as_millis() as u64;

/// Delay between characters (milliseconds).
pub const DEFAULT_TYPEWRITER_CHAR_INTERVAL_MS: u64 =
    typewriter::DEFAULT_CHAR_INTERVAL.as_millis() as u64;
pub const MIN_TYPEWRITER_CHAR_INTERVAL_MS: u64 = 10;
pub const MAX_TYPEWRITER_CHAR_INTERVAL_MS: u64 = 1_000;

/// How long the cursor stays after the last character (milliseconds).
pub const DEFAULT_TYPEWRITER_CURSOR_LINGER_MS: u64 =
    typewriter::DEFAULT_CURSOR_LINGER.as_millis() as u64;

/// Upper bound for the start delay and cursor linger.
pub const MAX_TYPEWRITER_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Simulated submission latency (milliseconds).
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = contact::DEFAULT_SUBMIT_DELAY.as_millis() as u64;
pub const MAX_SUBMIT_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scroll thresholds
    assert!(DEFAULT_NAVBAR_THRESHOLD < DEFAULT_BACK_TO_TOP_THRESHOLD);
    assert!(DEFAULT_BACK_TO_TOP_THRESHOLD <= MAX_SCROLL_THRESHOLD);
    assert!(DEFAULT_SECTION_ACTIVATION_OFFSET <= MAX_SCROLL_THRESHOLD);
    assert!(DEFAULT_ANCHOR_OFFSET <= MAX_SCROLL_THRESHOLD);
    assert!(DEFAULT_RATE_LIMIT_MS >= MIN_RATE_LIMIT_MS);
    assert!(DEFAULT_RATE_LIMIT_MS <= MAX_RATE_LIMIT_MS);

    // Toast timings
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_SLIDE_IN_DELAY_MS <= MAX_TOAST_TRANSITION_MS);
    assert!(DEFAULT_TOAST_SLIDE_OUT_MS <= MAX_TOAST_TRANSITION_MS);
    // The toast must be fully in before it can start leaving.
    assert!(
        DEFAULT_TOAST_SLIDE_IN_DELAY_MS + DEFAULT_TOAST_SLIDE_OUT_MS < DEFAULT_TOAST_DURATION_MS
    );

    // Typewriter timings
    assert!(DEFAULT_TYPEWRITER_CHAR_INTERVAL_MS >= MIN_TYPEWRITER_CHAR_INTERVAL_MS);
    assert!(DEFAULT_TYPEWRITER_CHAR_INTERVAL_MS <= MAX_TYPEWRITER_CHAR_INTERVAL_MS);
    assert!(DEFAULT_TYPEWRITER_START_DELAY_MS <= MAX_TYPEWRITER_DELAY_MS);
    assert!(DEFAULT_TYPEWRITER_CURSOR_LINGER_MS <= MAX_TYPEWRITER_DELAY_MS);

    // Contact
    assert!(DEFAULT_SUBMIT_DELAY_MS <= MAX_SUBMIT_DELAY_MS);
};
