// SPDX-License-Identifier: MPL-2.0
//! `folio` is a single-page personal portfolio built with the Iced GUI framework.
//!
//! The page combines a fixed navbar with a compact dropdown menu, eased
//! anchor scrolling, scroll-driven navbar and back-to-top state, a
//! typewriter hero heading, reveal animations, a validated contact form
//! and a single-toast notification system.
//!
//! Page behavior lives in [`domain`] and [`effects`], neither of which
//! reads the wall clock directly; [`ui`] renders their state and [`app`]
//! wires both into the Iced runtime.

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod effects;
pub mod error;
pub mod i18n;
pub mod ui;
