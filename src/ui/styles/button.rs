// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button: hero call-to-action and the contact submit.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand_primary)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_secondary,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.brand_secondary)),
            text_color: WHITE,
            border: Border {
                color: colors.brand_secondary,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        // Submit button while the form is sending.
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..colors.brand_primary
            })),
            text_color: Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            },
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Transparent button with a brand border, for the secondary hero action.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

    button::Style {
        background: hovered.then_some(Background::Color(colors.brand_primary)),
        text_color: if hovered { WHITE } else { colors.brand_primary },
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only navbar link; the active section's link is highlighted.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::from_theme(theme);
        let text_color = if active || matches!(status, button::Status::Hovered) {
            colors.brand_primary
        } else {
            colors.text_primary
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    colors.brand_primary
                } else {
                    Color::TRANSPARENT
                },
                width: if active { border::WIDTH_MD } else { 0.0 },
                radius: radius::NONE.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless icon button used for the hamburger toggle and the blog links.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(colors.brand_soft))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.brand_primary,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round floating button in the bottom-right corner.
pub fn back_to_top(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let (background, elevation) = match status {
        button::Status::Hovered | button::Status::Pressed => (colors.brand_secondary, shadow::LG),
        _ => (colors.brand_primary, shadow::MD),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: elevation,
        snap: true,
    }
}

/// Round footer social link; hovering lifts it onto a deeper shadow.
pub fn social_link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let (background, text_color, elevation) = match status {
        button::Status::Hovered => (colors.brand_primary, WHITE, shadow::LG),
        button::Status::Pressed => (colors.brand_primary, WHITE, shadow::SM),
        _ => (colors.brand_soft, colors.brand_primary, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: elevation,
        snap: true,
    }
}
