// SPDX-License-Identifier: MPL-2.0
//! Contact section: contact details beside the message form.

use super::{header, revealed, section, Message, ViewContext};
use crate::domain::contact::Field;
use crate::effects::layout::{self, targets};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

const ITEMS: [&str; layout::CONTACT_ITEM_COUNT] = ["email", "phone", "location"];

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut body = Row::new().spacing(spacing::XL).push(details(ctx));
    if ctx.layout.has_contact_form {
        body = body.push(form(ctx));
    }

    section(
        layout::CONTACT,
        true,
        Column::new().push(header(ctx, layout::CONTACT)).push(body),
    )
}

fn details<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = ITEMS.iter().enumerate().fold(
        Column::new()
            .width(Length::FillPortion(2))
            .spacing(layout::CONTACT_ITEM_GAP as f32),
        |column, (index, item)| {
            let id = targets::contact_item(index);
            let content = Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(ctx.i18n.tr(&format!("contact-item-{item}-label")))
                        .size(typography::CAPTION),
                )
                .push(
                    Text::new(ctx.i18n.tr(&format!("contact-item-{item}-value")))
                        .size(typography::BODY_LG),
                );

            column.push(
                Container::new(revealed(ctx, &id, content))
                    .width(Length::Fill)
                    .padding([0.0, spacing::MD])
                    .center_y(Length::Fixed(layout::CONTACT_ITEM_HEIGHT as f32))
                    .style(styles::container::card(ctx.progress(&id))),
            )
        },
    );
    column.into()
}

fn form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = if ctx.submitting {
        ctx.i18n.tr("contact-sending")
    } else {
        ctx.i18n.tr("contact-submit")
    };
    let submit = button(
        Container::new(Text::new(label).size(typography::BODY_LG)).center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary);
    let submit = if ctx.submitting {
        submit
    } else {
        submit.on_press(Message::Submit)
    };

    Column::new()
        .width(Length::FillPortion(3))
        .spacing(spacing::MD)
        .push(field(ctx, Field::Name, "contact-name-placeholder", &ctx.form.name))
        .push(field(ctx, Field::Email, "contact-email-placeholder", &ctx.form.email))
        .push(field(
            ctx,
            Field::Message,
            "contact-message-placeholder",
            &ctx.form.message,
        ))
        .push(submit)
        .into()
}

fn field<'a>(ctx: &ViewContext<'a>, field: Field, key: &str, value: &str) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr(key), value)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::contact_field);

    // Fields are read-only while the message is being sent.
    if ctx.submitting {
        input.into()
    } else {
        input
            .on_input(move |value| Message::Edit(field, value))
            .into()
    }
}
