// SPDX-License-Identifier: MPL-2.0
//! Hero section: typewriter heading, tagline and call-to-action buttons.

use super::{section_height, Message, ViewContext};
use crate::domain::typewriter::Frame;
use crate::effects::layout;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::font::Weight;
use iced::widget::{button, text, Column, Container, Row, Space, Stack, Text};
use iced::{alignment::Horizontal, Element, Font, Length, Theme};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let height = section_height(layout::HOME);

    // Backdrop drifts down at half the scroll speed; the section clips it.
    let backdrop = Column::new()
        .push(Space::new().height(Length::Fixed(ctx.parallax)))
        .push(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .style(styles::container::hero_backdrop),
        );

    let buttons = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("hero-button-blog")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::HeroButton(layout::BLOG.to_string()))
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-button-contact")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::HeroButton(layout::CONTACT.to_string()))
                .style(styles::button::outline),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading(ctx))
        .push(Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("hero-description")).size(typography::BODY_LG))
        .push(buttons);

    let foreground = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, spacing::LG])
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    Container::new(Stack::new().push(backdrop).push(foreground))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .style(styles::container::section(false))
        .into()
}

/// The heading as the typewriter currently shows it.
fn heading<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match &ctx.hero {
        Some(frame) => typed_heading(frame),
        None => {
            let lead_in = ctx.i18n.tr("hero-lead-in");
            let name = ctx.i18n.tr("hero-name");
            typed_heading(&Frame {
                lead_in: &lead_in,
                name: &name,
                cursor: false,
            })
        }
    }
}

/// Lead-in, emphasized name and optional cursor on one line.
///
/// Keeps the line height even while nothing is revealed yet.
fn typed_heading<'a>(frame: &Frame<'_>) -> Element<'a, Message> {
    let mut row = Row::new()
        .height(Length::Fixed(typography::DISPLAY * 1.4))
        .push(Text::new(frame.lead_in.to_string()).size(typography::DISPLAY));

    if !frame.name.is_empty() {
        row = row.push(
            Text::new(frame.name.to_string())
                .size(typography::DISPLAY)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::from_theme(theme).brand_primary),
                }),
        );
    }

    if frame.cursor {
        row = row.push(
            Text::new("|")
                .size(typography::DISPLAY)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::from_theme(theme).brand_primary),
                }),
        );
    }

    row.into()
}
