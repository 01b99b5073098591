// SPDX-License-Identifier: MPL-2.0
//! Scroll-derived page state.
//!
//! Everything here is a pure function of the vertical scroll offset and the
//! static section layout. Nothing is remembered between calls.

use std::ops::Range;

/// Offset past which the navbar switches to its "scrolled" style.
pub const NAVBAR_SCROLLED_THRESHOLD: u32 = 50;

/// Offset past which the back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD: u32 = 300;

/// How far above a section's top its activation range begins.
pub const SECTION_ACTIVATION_OFFSET: u32 = 100;

/// Fixed navbar height subtracted from anchor scroll targets.
pub const ANCHOR_OFFSET: u32 = 70;

/// Hero background moves at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f32 = 0.5;

/// The vertical scroll position of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset_y: u32,
}

impl ScrollState {
    /// Creates a scroll state from a raw platform offset.
    ///
    /// Overscroll can report negative or fractional offsets; those are
    /// clamped to zero and rounded.
    #[must_use]
    pub fn from_raw(offset_y: f32) -> Self {
        let offset_y = if offset_y.is_finite() && offset_y > 0.0 {
            offset_y.round() as u32
        } else {
            0
        };
        Self { offset_y }
    }
}

/// A section of the page that a navigation link can point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub id: String,
    pub top_offset: u32,
    pub height: u32,
}

impl NavSection {
    #[must_use]
    pub fn new(id: impl Into<String>, top_offset: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            top_offset,
            height,
        }
    }

    /// Returns the half-open offset range in which this section is active.
    #[must_use]
    pub fn activation_range(&self, activation_offset: u32) -> Range<i64> {
        let start = i64::from(self.top_offset) - i64::from(activation_offset);
        start..start + i64::from(self.height)
    }

    /// Returns the scroll offset that brings this section just below the navbar.
    #[must_use]
    pub fn anchor_target(&self, anchor_offset: u32) -> u32 {
        self.top_offset.saturating_sub(anchor_offset)
    }
}

/// Lays out sections one after another, in document order.
///
/// Each entry is an `(id, height)` pair; the top offset of each section is
/// the sum of the heights before it, starting at `start`.
#[must_use]
pub fn stack_sections<'a, I>(start: u32, sections: I) -> Vec<NavSection>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut top = start;
    sections
        .into_iter()
        .map(|(id, height)| {
            let section = NavSection::new(id, top, height);
            top = top.saturating_add(height);
            section
        })
        .collect()
}

/// Thresholds that turn an offset into visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollThresholds {
    pub navbar_scrolled: u32,
    pub back_to_top: u32,
    pub section_activation: u32,
    pub anchor: u32,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            navbar_scrolled: NAVBAR_SCROLLED_THRESHOLD,
            back_to_top: BACK_TO_TOP_THRESHOLD,
            section_activation: SECTION_ACTIVATION_OFFSET,
            anchor: ANCHOR_OFFSET,
        }
    }
}

/// Visual state derived from one scroll sample.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollDerived {
    pub navbar_scrolled: bool,
    pub active_section: Option<String>,
    pub back_to_top_visible: bool,
}

#[must_use]
pub fn is_navbar_scrolled(offset_y: u32, thresholds: &ScrollThresholds) -> bool {
    offset_y > thresholds.navbar_scrolled
}

#[must_use]
pub fn is_back_to_top_visible(offset_y: u32, thresholds: &ScrollThresholds) -> bool {
    offset_y > thresholds.back_to_top
}

/// Returns the section whose activation range contains `offset_y`.
///
/// When ranges overlap, the last matching section in document order wins.
#[must_use]
pub fn active_section<'a>(
    sections: &'a [NavSection],
    offset_y: u32,
    activation_offset: u32,
) -> Option<&'a NavSection> {
    let offset = i64::from(offset_y);
    sections
        .iter()
        .filter(|section| section.activation_range(activation_offset).contains(&offset))
        .last()
}

/// Hero background displacement for the given offset.
#[must_use]
pub fn parallax_offset(offset_y: u32) -> f32 {
    offset_y as f32 * PARALLAX_FACTOR
}

/// Derives every scroll-driven flag at once.
#[must_use]
pub fn derive(
    state: ScrollState,
    sections: &[NavSection],
    thresholds: &ScrollThresholds,
) -> ScrollDerived {
    ScrollDerived {
        navbar_scrolled: is_navbar_scrolled(state.offset_y, thresholds),
        active_section: active_section(sections, state.offset_y, thresholds.section_activation)
            .map(|section| section.id.clone()),
        back_to_top_visible: is_back_to_top_visible(state.offset_y, thresholds),
    }
}
