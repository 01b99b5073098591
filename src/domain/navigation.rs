// SPDX-License-Identifier: MPL-2.0
//! Mobile navigation menu state.
//!
//! The menu has exactly one flag. Page scrolling is locked whenever the menu
//! is open, so the lock is derived rather than stored.

/// Where a click landed, relative to the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRegion {
    /// The hamburger toggle control.
    Toggle,
    /// Inside the menu panel, but not on a link.
    MenuPanel,
    /// A navigation link inside the menu panel.
    NavLink,
    /// Anywhere else on the page.
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Page scroll is disabled while the menu is open.
    #[must_use]
    pub fn scroll_locked(self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Applies a click and returns whether the open state changed.
    pub fn handle_click(&mut self, region: ClickRegion) -> bool {
        let before = self.open;
        match region {
            ClickRegion::Toggle => {
                self.toggle();
            }
            ClickRegion::NavLink | ClickRegion::Outside => self.close(),
            ClickRegion::MenuPanel => {}
        }
        before != self.open
    }
}
