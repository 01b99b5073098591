// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded in the binary
//! - Runtime language switching
//! - Missing keys render as `MISSING: <key>` instead of failing
//!
//! Every user-visible string goes through here, including toast messages and
//! the text the hero typewriter reveals.

pub mod fluent;
