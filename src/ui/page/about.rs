// SPDX-License-Identifier: MPL-2.0
//! About section: biography with skill tags beside a column of stats.

use super::{header, revealed, section, Message, ViewContext};
use crate::effects::layout::{self, targets};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Skill tags in display order. Product names are not translated.
pub const SKILLS: [&str; layout::SKILL_TAG_COUNT] =
    ["Rust", "TypeScript", "Python", "Linux", "Docker", "PostgreSQL"];

const STATS: [&str; layout::STAT_COUNT] = ["stat-projects", "stat-years", "stat-articles"];

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column_height = Length::Fixed(layout::ABOUT_COLUMN_HEIGHT as f32);

    let text_column = Container::new(revealed(ctx, targets::ABOUT_TEXT, biography(ctx)))
        .width(Length::FillPortion(3))
        .height(column_height);
    let stats_column = Container::new(revealed(ctx, targets::ABOUT_STATS, stats(ctx)))
        .width(Length::FillPortion(2))
        .height(column_height);

    let body = Row::new()
        .spacing(spacing::XL)
        .push(text_column)
        .push(stats_column);

    section(
        layout::ABOUT,
        true,
        Column::new().push(header(ctx, layout::ABOUT)).push(body),
    )
}

fn biography<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tags = SKILLS
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, skill)| {
            let pulsing = ctx.skill_pulse.is_pulsing(index, ctx.now);
            row.push(
                Container::new(Text::new(*skill).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::skill_tag(pulsing)),
            )
        })
        .wrap();

    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("about-paragraph-1")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("about-paragraph-2")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("about-skills")).size(typography::TITLE_SM))
        .push(tags)
        .into()
}

fn stats<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    STATS
        .iter()
        .enumerate()
        .fold(
            Column::new().spacing(layout::STAT_ITEM_GAP as f32),
            |column, (index, key)| {
                let id = targets::stat(index);
                let card = Column::new()
                    .align_x(Horizontal::Center)
                    .spacing(spacing::XXS)
                    .push(Text::new(ctx.i18n.tr(&format!("{key}-value"))).size(typography::TITLE_MD))
                    .push(Text::new(ctx.i18n.tr(&format!("{key}-label"))).size(typography::BODY));

                column.push(
                    Container::new(revealed(ctx, &id, card))
                        .width(Length::Fill)
                        .height(Length::Fixed(layout::STAT_ITEM_HEIGHT as f32))
                        .center_x(Length::Fill)
                        .center_y(Length::Fixed(layout::STAT_ITEM_HEIGHT as f32))
                        .style(styles::container::card(ctx.progress(&id))),
                )
            },
        )
        .into()
}
