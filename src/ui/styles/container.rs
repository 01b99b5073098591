// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::{self, ColorScheme};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Fixed navbar. Gains a translucent background and a shadow once scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::from_theme(theme);
        let (background, elevation) = if scrolled {
            (colors.navbar_scrolled, shadow_with_alpha(shadow::MD, opacity::OVERLAY_SUBTLE))
        } else {
            (colors.surface_primary, shadow::NONE)
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(colors.text_primary),
            shadow: elevation,
            ..Default::default()
        }
    }
}

/// Dropdown panel holding the navigation links on narrow windows.
pub fn menu_panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow_with_alpha(shadow::LG, opacity::OVERLAY_SUBTLE),
        ..Default::default()
    }
}

/// Hero backdrop, drawn behind the heading and shifted for parallax.
pub fn hero_backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_soft)),
        ..Default::default()
    }
}

/// Full-width section band; alternate sections use the secondary surface.
pub fn section(alternate: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::from_theme(theme);
        let background = if alternate {
            colors.surface_secondary
        } else {
            colors.surface_primary
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

/// Blog cards, stat blocks and contact items, faded by `alpha` while revealing.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::from_theme(theme);
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..colors.surface_card
            })),
            border: Border {
                color: Color {
                    a: alpha,
                    ..colors.border
                },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow_with_alpha(shadow::SM, opacity::OVERLAY_SUBTLE * alpha),
            ..Default::default()
        }
    }
}

/// Transparent wrapper that fades inherited text by `alpha`.
pub fn reveal(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        text_color: Some(Color {
            a: alpha,
            ..ColorScheme::from_theme(theme).text_primary
        }),
        ..Default::default()
    }
}

/// Pill-shaped skill tag. Pulsing tags switch to the brand color.
pub fn skill_tag(pulsing: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::from_theme(theme);
        let (background, text) = if pulsing {
            (colors.brand_primary, palette::WHITE)
        } else {
            (colors.brand_soft, colors.brand_secondary)
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

pub fn footer(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(if theming::is_dark_theme(theme) {
            colors.text_secondary
        } else {
            palette::GRAY_200
        }),
        ..Default::default()
    }
}

fn shadow_with_alpha(base: Shadow, alpha: f32) -> Shadow {
    Shadow {
        color: Color {
            a: alpha,
            ..base.color
        },
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_navbar_has_shadow() {
        let flat = navbar(false)(&Theme::Light);
        let scrolled = navbar(true)(&Theme::Light);
        assert_eq!(flat.shadow.blur_radius, 0.0);
        assert!(scrolled.shadow.blur_radius > 0.0);
        assert_eq!(
            scrolled.background,
            Some(Background::Color(ColorScheme::light().navbar_scrolled))
        );
    }

    #[test]
    fn pulsing_tag_uses_brand_background() {
        let idle = skill_tag(false)(&Theme::Light);
        let pulsing = skill_tag(true)(&Theme::Light);
        assert_ne!(idle.background, pulsing.background);
        assert_eq!(pulsing.text_color, Some(palette::WHITE));
    }

    #[test]
    fn hidden_card_is_invisible() {
        let hidden = card(0.0)(&Theme::Light);
        match hidden.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.0),
            _ => panic!("Expected background color"),
        }
        assert_eq!(reveal(0.0)(&Theme::Light).text_color.map(|c| c.a), Some(0.0));
    }

    #[test]
    fn alternate_sections_differ() {
        let plain = section(false)(&Theme::Light);
        let alternate = section(true)(&Theme::Light);
        assert_ne!(plain.background, alternate.background);
    }
}
