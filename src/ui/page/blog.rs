// SPDX-License-Identifier: MPL-2.0
//! Blog section: a row of post cards.

use super::{header, revealed, section, Message, ViewContext};
use crate::effects::layout::{self, targets};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::font::Weight;
use iced::widget::{text, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length, Theme};

/// Height of the colored band at the top of each card.
const COVER_HEIGHT: f32 = 160.0;

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = (0..layout::BLOG_CARD_COUNT).fold(Row::new().spacing(spacing::LG), |row, index| {
        row.push(card(ctx, index))
    });

    section(
        layout::BLOG,
        false,
        Column::new().push(header(ctx, layout::BLOG)).push(cards),
    )
}

fn card<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let id = targets::blog_card(index);
    let key = |part: &str| format!("blog-card-{}-{part}", index + 1);

    let cover = Container::new(Space::new().width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(COVER_HEIGHT))
        .style(styles::container::hero_backdrop);

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(Text::new(ctx.i18n.tr(&key("date"))).size(typography::CAPTION))
        .push(
            Text::new(ctx.i18n.tr(&key("title")))
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(Text::new(ctx.i18n.tr(&key("excerpt"))).size(typography::BODY))
        .push(
            Text::new(ctx.i18n.tr("blog-read-more"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::from_theme(theme).brand_primary),
                }),
        );

    let progress = ctx.progress(&id);
    Container::new(revealed(ctx, &id, Column::new().push(cover).push(body)))
        .width(Length::FillPortion(1))
        .height(Length::Fixed(layout::BLOG_CARD_HEIGHT as f32))
        .clip(true)
        .style(styles::container::card(progress))
        .into()
}
