// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar.
//!
//! Wide windows show the section links inline. Below
//! [`sizing::COMPACT_BREAKPOINT`] the links move into a dropdown panel opened
//! by the hamburger button. The bar itself only reports what was pressed;
//! menu state lives in the effects controller.

use crate::effects::{layout, ViewHandle};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, Column, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Section links in display order, with their label keys.
pub const LINKS: [(&str, &str); 4] = [
    (layout::HOME, "nav-home"),
    (layout::ABOUT, "nav-about"),
    (layout::BLOG, "nav-blog"),
    (layout::CONTACT, "nav-contact"),
];

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub scrolled: bool,
    pub active_section: Option<&'a str>,
    /// Window is narrow enough to collapse the links.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    /// Press inside the open panel but not on a link.
    PanelPressed,
    GoTo(String),
}

impl Message {
    /// The page element this message originated from.
    #[must_use]
    pub fn handle(self) -> ViewHandle {
        match self {
            Message::ToggleMenu => ViewHandle::MenuToggle,
            Message::PanelPressed => ViewHandle::MenuPanel,
            Message::GoTo(section) => ViewHandle::NavLink(section),
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("nav-brand"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let glyph = if ctx.menu_open { "✕" } else { "☰" };
        row = row.push(
            button(Text::new(glyph).size(typography::TITLE_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::ghost),
        );
    } else {
        for link in links(ctx) {
            row = row.push(link);
        }
    }

    let inner = Container::new(row)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([0.0, spacing::LG])
        .center_y(Length::Fill);

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_x(Horizontal::Center)
        .style(styles::container::navbar(ctx.scrolled))
        .into()
}

/// The dropdown panel, rendered only while the compact menu is open.
pub fn menu_panel<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !(ctx.compact && ctx.menu_open) {
        return None;
    }

    let column = links(ctx)
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), Column::push);

    let panel = Container::new(column)
        .width(Length::Fixed(sizing::MENU_PANEL_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::menu_panel);

    Some(
        Container::new(mouse_area(panel).on_press(Message::PanelPressed))
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(iced::Padding {
                top: sizing::NAVBAR_HEIGHT,
                right: spacing::LG,
                bottom: 0.0,
                left: 0.0,
            })
            .into(),
    )
}

fn links<'a>(ctx: &ViewContext<'a>) -> Vec<Element<'a, Message>> {
    LINKS
        .iter()
        .map(|(section, key)| {
            let active = ctx.active_section == Some(*section);
            button(Text::new(ctx.i18n.tr(key)).size(typography::BODY_LG))
                .on_press(Message::GoTo((*section).to_string()))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::nav_link(active))
                .into()
        })
        .collect()
}
