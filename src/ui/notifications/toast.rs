// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the visible notification.
//!
//! The toast is a solid card in the kind's color with white text and a close
//! button. Its slide progress drives both opacity and a horizontal inset so it
//! appears to slide in from the right edge.

use super::manager::{Manager, Message};
use super::notification::{Kind, Notification};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n, progress: f32) -> Element<'a, Message> {
        let accent = kind_color(notification.kind());
        let alpha = progress.clamp(0.0, 1.0);

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..palette::WHITE
                }),
            });

        let dismiss_button = button(Text::new("×").size(typography::TITLE_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XXS])
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::MD)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders the toast overlay in the top-right corner, below the navbar.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let Some(notification) = manager.visible() else {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let progress = notification.slide_progress(now, manager.timing());
        // Slides in from off the right edge.
        let inset = (1.0 - progress) * (sizing::TOAST_WIDTH + spacing::LG);

        let row = Row::new()
            .push(Self::view(notification, i18n, progress))
            .push(Space::new().width(Length::Fixed(inset)));

        Container::new(row)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(iced::Padding {
                top: sizing::NAVBAR_HEIGHT + spacing::LG,
                right: spacing::LG,
                bottom: 0.0,
                left: 0.0,
            })
            .into()
    }
}

/// Returns the card color for a notification kind.
#[must_use]
fn kind_color(kind: Kind) -> Color {
    match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Error => palette::ERROR_500,
        Kind::Info => palette::INFO_500,
    }
}

fn toast_container_style(_theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..accent })),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..palette::BLACK
            },
            ..shadow::MD
        },
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

fn dismiss_button_style(_theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = Color {
        a: alpha,
        ..palette::WHITE
    };
    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE * alpha,
            ..palette::WHITE
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..palette::WHITE
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
