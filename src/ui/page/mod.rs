// SPDX-License-Identifier: MPL-2.0
//! The scrollable portfolio page.
//!
//! Every section is drawn at the fixed height given by
//! [`effects::layout`](crate::effects::layout), so what is on screen matches
//! the offsets the controller uses for anchors, the active link and reveals.

mod about;
mod blog;
mod contact;
mod footer;
mod hero;

use crate::domain::contact::{ContactForm, Field};
use crate::domain::reveal::{RevealKind, RevealTracker, SkillPulse};
use crate::domain::typewriter::Frame;
use crate::effects::layout::{self, PageLayout};
use crate::effects::{Event, ViewHandle};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::scroll_lock;
use iced::widget::scrollable::{Scrollable, Viewport};
use iced::widget::{button, mouse_area, Column, Container, Id, Space, Text};
use iced::{alignment::Horizontal, Element, Length, Padding};
use std::time::Instant;

/// Identifier of the page scrollable, targeted by anchor scrolls.
pub const SCROLLABLE_ID: &str = "folio-page";

/// Distance revealed elements travel while fading or sliding in.
const REVEAL_SHIFT: f32 = 40.0;

/// Everything the page needs to render one frame.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: &'a PageLayout,
    /// Typewriter output; `None` shows the full heading.
    pub hero: Option<Frame<'a>>,
    pub parallax: f32,
    pub reveal: &'a RevealTracker,
    pub skill_pulse: &'a SkillPulse,
    pub form: &'a ContactForm,
    pub submitting: bool,
    pub scroll_locked: bool,
    pub now: Instant,
}

impl ViewContext<'_> {
    fn progress(&self, id: &str) -> f32 {
        self.reveal.progress(id, self.now)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    HeroButton(String),
    Edit(Field, String),
    Submit,
    Scrolled { offset_y: f32, viewport_height: f32 },
    BackToTop,
    SocialLink(usize),
    /// Press on the page outside any control.
    Pressed,
}

impl Message {
    /// Translates the page message into a controller event.
    #[must_use]
    pub fn into_event(self) -> Event {
        match self {
            Message::HeroButton(target) => Event::Click(ViewHandle::HeroButton(target)),
            Message::Edit(field, value) => Event::Edit(field, value),
            Message::Submit => Event::Submit,
            Message::Scrolled {
                offset_y,
                viewport_height,
            } => Event::Scrolled {
                offset_y,
                viewport_height,
            },
            Message::BackToTop => Event::Click(ViewHandle::BackToTop),
            Message::SocialLink(index) => Event::Click(ViewHandle::SocialLink(index)),
            Message::Pressed => Event::Click(ViewHandle::Page),
        }
    }
}

/// Renders the whole scrollable page.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .width(Length::Fill)
        .push(hero::view(ctx))
        .push(about::view(ctx))
        .push(blog::view(ctx))
        .push(contact::view(ctx))
        .push(footer::view(ctx));

    let scrollable = Scrollable::new(mouse_area(column).on_press(Message::Pressed))
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        });

    scroll_lock(scrollable, ctx.scroll_locked).into()
}

/// The floating back-to-top button, when visible.
pub fn back_to_top<'a>(visible: bool, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    if !visible {
        return None;
    }

    let arrow = button(
        Container::new(Text::new("↑").size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::BACK_TO_TOP))
    .height(Length::Fixed(sizing::BACK_TO_TOP))
    .on_press(Message::BackToTop)
    .style(styles::button::back_to_top);

    let labelled = iced::widget::tooltip(
        arrow,
        Text::new(i18n.tr("back-to-top")).size(typography::CAPTION),
        iced::widget::tooltip::Position::Left,
    );

    Some(
        Container::new(labelled)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(spacing::XL)
            .into(),
    )
}

/// A full-width section band of fixed height with centered content.
fn section<'a>(
    id: &str,
    alternate: bool,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let height = section_height(id);
    let inner = Container::new(content)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding(Padding {
            top: layout::SECTION_PADDING as f32,
            right: spacing::LG,
            bottom: 0.0,
            left: spacing::LG,
        });

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .clip(true)
        .style(styles::container::section(alternate))
        .into()
}

fn section_height(id: &str) -> f32 {
    layout::SECTION_HEIGHTS
        .iter()
        .find(|(section, _)| *section == id)
        .map_or(0.0, |(_, height)| *height as f32)
}

/// Section title and subtitle, revealed as one block.
fn header<'a>(ctx: &ViewContext<'a>, section: &str) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr(&format!("{section}-title")))
        .size(typography::TITLE_LG)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::default()
        });
    let subtitle = Text::new(ctx.i18n.tr(&format!("{section}-subtitle"))).size(typography::BODY_LG);

    let block = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle);

    let header = Container::new(revealed(ctx, &layout::targets::header(section), block))
        .width(Length::Fill)
        .height(Length::Fixed(layout::HEADER_HEIGHT as f32))
        .align_x(Horizontal::Center);

    Column::new()
        .push(header)
        .push(Space::new().height(Length::Fixed(layout::HEADER_GAP as f32)))
        .into()
}

/// Wraps `content` in the transition of reveal target `id`.
///
/// Fade-ins rise from below; slides come in from their side. Text fades
/// with the transition through the inherited text color.
fn revealed<'a>(
    ctx: &ViewContext<'a>,
    id: &str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let progress = ctx.progress(id);
    let kind = ctx.reveal.kind(id).unwrap_or(RevealKind::FadeIn);

    Container::new(content)
        .padding(reveal_padding(kind, progress))
        .style(styles::container::reveal(progress))
        .into()
}

/// Padding that places content along its reveal path.
///
/// Slides keep a constant horizontal budget of [`REVEAL_SHIFT`] and settle
/// centered in it.
fn reveal_padding(kind: RevealKind, progress: f32) -> Padding {
    let remaining = (1.0 - progress.clamp(0.0, 1.0)) * REVEAL_SHIFT;
    let settled = REVEAL_SHIFT / 2.0;
    match kind {
        RevealKind::FadeIn => Padding {
            top: remaining,
            ..Padding::ZERO
        },
        RevealKind::SlideInLeft => {
            let left = (settled - remaining / 2.0).max(0.0);
            Padding {
                left,
                right: REVEAL_SHIFT - left,
                ..Padding::ZERO
            }
        }
        RevealKind::SlideInRight => {
            let left = settled + remaining / 2.0;
            Padding {
                left,
                right: REVEAL_SHIFT - left,
                ..Padding::ZERO
            }
        }
    }
}
