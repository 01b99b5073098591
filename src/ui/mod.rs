// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they read
//! state owned by the effects controller and emit messages that the app turns
//! into controller events.
//!
//! - [`page`] - The scrollable portfolio page and the back-to-top button
//! - [`navbar`] - Fixed navigation bar with the compact dropdown menu
//! - [`notifications`] - Single-toast notification system
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod styles;
pub mod theming;
pub mod widgets;
