// SPDX-License-Identifier: MPL-2.0
//! Static page geometry.
//!
//! The page is laid out with fixed heights so that every section and reveal
//! target has a known vertical position. The view renders with the same
//! constants, which keeps anchor targets and activation ranges in sync with
//! what is on screen.

use crate::domain::reveal::{stagger, RevealKind, RevealTarget};
use crate::domain::scroll::{stack_sections, NavSection};

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const BLOG: &str = "blog";
pub const CONTACT: &str = "contact";

/// Section heights in document order.
pub const SECTION_HEIGHTS: [(&str, u32); 4] = [(HOME, 720), (ABOUT, 760), (BLOG, 820), (CONTACT, 760)];
pub const FOOTER_HEIGHT: u32 = 120;

/// Vertical padding at the top of each non-hero section.
pub const SECTION_PADDING: u32 = 80;
pub const HEADER_HEIGHT: u32 = 90;
pub const HEADER_GAP: u32 = 30;
/// Offset of a section's body below the section top.
pub const BODY_OFFSET: u32 = SECTION_PADDING + HEADER_HEIGHT + HEADER_GAP;

pub const ABOUT_COLUMN_HEIGHT: u32 = 380;
pub const STAT_ITEM_HEIGHT: u32 = 100;
pub const STAT_ITEM_GAP: u32 = 20;
pub const STAT_COUNT: usize = 3;
pub const BLOG_CARD_HEIGHT: u32 = 420;
pub const BLOG_CARD_COUNT: usize = 3;
pub const CONTACT_ITEM_HEIGHT: u32 = 90;
pub const CONTACT_ITEM_GAP: u32 = 20;
pub const CONTACT_ITEM_COUNT: usize = 3;
pub const SKILL_TAG_COUNT: usize = 6;

/// An external profile listed in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/",
    },
    SocialLink {
        name: "Twitter",
        url: "https://twitter.com/",
    },
];

/// Ids of reveal targets, shared with the view.
pub mod targets {
    pub const ABOUT_TEXT: &str = "about-text";
    pub const ABOUT_STATS: &str = "about-stats";

    #[must_use]
    pub fn header(section: &str) -> String {
        format!("{section}-header")
    }

    #[must_use]
    pub fn stat(index: usize) -> String {
        format!("stat-{index}")
    }

    #[must_use]
    pub fn blog_card(index: usize) -> String {
        format!("blog-card-{index}")
    }

    #[must_use]
    pub fn contact_item(index: usize) -> String {
        format!("contact-item-{index}")
    }
}

/// Everything the effects controller needs to know about the page.
///
/// Optional elements can be turned off; features that depend on a missing
/// element do nothing.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub sections: Vec<NavSection>,
    pub reveal_targets: Vec<RevealTarget>,
    pub skill_tags: usize,
    pub social_links: &'static [SocialLink],
    pub has_hero_title: bool,
    pub has_contact_form: bool,
    pub has_back_to_top: bool,
}

impl PageLayout {
    /// The portfolio page: hero, about, blog and contact sections.
    #[must_use]
    pub fn portfolio() -> Self {
        let sections = stack_sections(0, SECTION_HEIGHTS);
        let reveal_targets = reveal_targets(&sections);
        Self {
            sections,
            reveal_targets,
            skill_tags: SKILL_TAG_COUNT,
            social_links: &SOCIAL_LINKS,
            has_hero_title: true,
            has_contact_form: true,
            has_back_to_top: true,
        }
    }

    /// A page with sections only and no optional elements.
    #[must_use]
    pub fn bare(sections: Vec<NavSection>) -> Self {
        Self {
            sections,
            reveal_targets: Vec::new(),
            skill_tags: 0,
            social_links: &[],
            has_hero_title: false,
            has_contact_form: false,
            has_back_to_top: false,
        }
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&NavSection> {
        self.sections.iter().find(|section| section.id == id)
    }
}

/// Builds reveal targets in document order.
///
/// Fade-in elements share one stagger sequence across the page; the two
/// about columns slide in without delay.
fn reveal_targets(sections: &[NavSection]) -> Vec<RevealTarget> {
    let top_of = |id: &str| {
        sections
            .iter()
            .find(|section| section.id == id)
            .map_or(0, |section| section.top_offset)
    };

    let mut fades = Vec::new();
    let mut slides = Vec::new();

    let about = top_of(ABOUT);
    fades.push(header_target(ABOUT, about));
    slides.push(RevealTarget::new(
        targets::ABOUT_TEXT,
        RevealKind::SlideInLeft,
        about + BODY_OFFSET,
        ABOUT_COLUMN_HEIGHT,
    ));
    slides.push(RevealTarget::new(
        targets::ABOUT_STATS,
        RevealKind::SlideInRight,
        about + BODY_OFFSET,
        ABOUT_COLUMN_HEIGHT,
    ));
    for index in 0..STAT_COUNT {
        let top = about + BODY_OFFSET + index as u32 * (STAT_ITEM_HEIGHT + STAT_ITEM_GAP);
        fades.push(RevealTarget::new(
            targets::stat(index),
            RevealKind::FadeIn,
            top,
            STAT_ITEM_HEIGHT,
        ));
    }

    let blog = top_of(BLOG);
    fades.push(header_target(BLOG, blog));
    for index in 0..BLOG_CARD_COUNT {
        fades.push(RevealTarget::new(
            targets::blog_card(index),
            RevealKind::FadeIn,
            blog + BODY_OFFSET,
            BLOG_CARD_HEIGHT,
        ));
    }

    let contact = top_of(CONTACT);
    fades.push(header_target(CONTACT, contact));
    for index in 0..CONTACT_ITEM_COUNT {
        let top = contact + BODY_OFFSET + index as u32 * (CONTACT_ITEM_HEIGHT + CONTACT_ITEM_GAP);
        fades.push(RevealTarget::new(
            targets::contact_item(index),
            RevealKind::FadeIn,
            top,
            CONTACT_ITEM_HEIGHT,
        ));
    }

    stagger(&mut fades);
    fades.extend(slides);
    fades
}

fn header_target(section: &str, section_top: u32) -> RevealTarget {
    RevealTarget::new(
        targets::header(section),
        RevealKind::FadeIn,
        section_top + SECTION_PADDING,
        HEADER_HEIGHT,
    )
}
