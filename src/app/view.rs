// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls underneath a stack of fixed overlays: the navbar, the
//! compact menu panel, the back-to-top button and the toast.

use super::Message;
use crate::effects::Controller;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::page::{self, ViewContext as PageViewContext};
use iced::widget::Stack;
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a Controller,
    pub window_size: Size,
}

/// Renders the page and its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controller = ctx.controller;
    let now = controller.now();
    let derived = controller.derived();
    let menu = controller.menu();
    let layout = controller.layout();

    let page = page::view(&PageViewContext {
        i18n: ctx.i18n,
        layout,
        hero: controller.typewriter().map(|typewriter| typewriter.frame()),
        parallax: controller.parallax_offset(),
        reveal: controller.reveal(),
        skill_pulse: controller.skill_pulse(),
        form: controller.submission().form(),
        submitting: controller.submission().is_submitting(),
        scroll_locked: menu.scroll_locked(),
        now,
    })
    .map(Message::Page);

    let navbar_ctx = NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: menu.is_open(),
        scrolled: derived.navbar_scrolled,
        active_section: derived.active_section.as_deref(),
        compact: ctx.window_size.width < sizing::COMPACT_BREAKPOINT,
    };

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(navbar::view(&navbar_ctx).map(Message::Navbar));

    if let Some(panel) = navbar::menu_panel(&navbar_ctx) {
        stack = stack.push(panel.map(Message::Navbar));
    }

    let back_to_top_visible = layout.has_back_to_top && derived.back_to_top_visible;
    if let Some(button) = page::back_to_top(back_to_top_visible, ctx.i18n) {
        stack = stack.push(button.map(Message::Page));
    }

    if controller.notifications().has_notifications() {
        stack = stack.push(
            Toast::view_overlay(controller.notifications(), ctx.i18n, now)
                .map(Message::Notification),
        );
    }

    stack.into()
}
