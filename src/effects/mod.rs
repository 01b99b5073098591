// SPDX-License-Identifier: MPL-2.0
//! Page effects: the headless controller between widget events and domain
//! state.
//!
//! The view layer turns widget messages into [`Event`]s naming abstract
//! [`ViewHandle`]s, feeds them to a [`Controller`], and renders whatever state
//! the controller exposes. Requests the controller cannot satisfy on its own,
//! such as scrolling the page, come back as [`Effect`]s.

pub mod controller;
pub mod event;
pub mod layout;

pub use controller::{
    Controller, Settings, CONTACT_SUCCESS_KEY, DEFAULT_RATE_LIMIT, LINK_COPIED_KEY,
};
pub use event::{Effect, Event, HeroText, ViewHandle};
pub use layout::PageLayout;
