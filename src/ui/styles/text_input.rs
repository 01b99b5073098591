// SPDX-License-Identifier: MPL-2.0
//! Contact form field styles.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Theme};

/// Rounded field that takes the brand color while focused.
pub fn contact_field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::from_theme(theme);
    let mut style = text_input::default(theme, status);

    style.background = Background::Color(colors.surface_card);
    style.border.radius = radius::MD.into();
    style.border.width = border::WIDTH_SM;
    style.border.color = match status {
        text_input::Status::Focused { .. } => colors.brand_primary,
        _ => colors.border,
    };
    style
}
