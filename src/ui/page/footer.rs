// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::effects::layout;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

const COPYRIGHT_YEAR: &str = "2024";

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name = ctx.i18n.tr("hero-name");
    let copyright = ctx
        .i18n
        .tr_with_args("footer-copyright", &[("year", COPYRIGHT_YEAR), ("name", &name)]);

    let links = ctx
        .layout
        .social_links
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (index, link)| {
            row.push(
                button(Text::new(link.name).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::SocialLink(index))
                    .style(styles::button::social_link),
            )
        });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(links)
        .push(Text::new(copyright).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(layout::FOOTER_HEIGHT as f32))
        .style(styles::container::footer)
        .into()
}
