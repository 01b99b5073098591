// SPDX-License-Identifier: MPL-2.0
//! Typed inputs and outputs of the effects controller.

use crate::domain::contact::Field;
use crate::domain::navigation::ClickRegion;
use crate::ui::notifications::NotificationId;

/// An interactive element of the page, named by role instead of by widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewHandle {
    /// The hamburger button.
    MenuToggle,
    /// The open menu panel, outside any link.
    MenuPanel,
    /// A navigation link pointing at a section id.
    NavLink(String),
    /// A hero call-to-action pointing at a section id.
    HeroButton(String),
    BackToTop,
    ToastClose(NotificationId),
    /// A footer social profile link, by position.
    SocialLink(usize),
    /// Any other part of the page.
    Page,
}

impl ViewHandle {
    /// Where this element sits relative to the navigation menu.
    #[must_use]
    pub fn click_region(&self) -> ClickRegion {
        match self {
            ViewHandle::MenuToggle => ClickRegion::Toggle,
            ViewHandle::MenuPanel => ClickRegion::MenuPanel,
            ViewHandle::NavLink(_) => ClickRegion::NavLink,
            ViewHandle::HeroButton(_)
            | ViewHandle::BackToTop
            | ViewHandle::ToastClose(_)
            | ViewHandle::SocialLink(_)
            | ViewHandle::Page => ClickRegion::Outside,
        }
    }
}

/// Localized hero heading, split at the emphasized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroText {
    pub lead_in: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page finished loading.
    Activate {
        hero: HeroText,
        viewport_height: f32,
    },
    Click(ViewHandle),
    /// Raw scroll notification from the page viewport.
    Scrolled { offset_y: f32, viewport_height: f32 },
    Resized { viewport_height: f32 },
    Edit(Field, String),
    Submit,
    /// Periodic timer used to fire due deadlines.
    Tick,
}

/// Something the view layer must do on the controller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Smoothly scroll the page to an absolute offset.
    ScrollTo { offset_y: u32 },
    /// Put the page straight back at an offset; scrolling is locked.
    HoldAt { offset_y: u32 },
    CopyToClipboard(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_menu_elements_are_inside_the_menu() {
        assert_eq!(ViewHandle::MenuToggle.click_region(), ClickRegion::Toggle);
        assert_eq!(ViewHandle::MenuPanel.click_region(), ClickRegion::MenuPanel);
        assert_eq!(
            ViewHandle::NavLink("about".into()).click_region(),
            ClickRegion::NavLink
        );
        assert_eq!(
            ViewHandle::HeroButton("contact".into()).click_region(),
            ClickRegion::Outside
        );
        assert_eq!(ViewHandle::Page.click_region(), ClickRegion::Outside);
        assert_eq!(ViewHandle::SocialLink(0).click_region(), ClickRegion::Outside);
    }
}
