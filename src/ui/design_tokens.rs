// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size and spacing value the portfolio page draws with.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```

Section heights are not tokens: they live in `effects::layout` because the
scroll reactor measures against them.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1f2937
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // #6b7280
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // #e5e7eb
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // #f3f4f6

    // Brand colors (indigo scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.878, 0.906, 1.0); // #e0e7ff
    pub const PRIMARY_400: Color = Color::from_rgb(0.506, 0.549, 0.973); // #818cf8
    pub const PRIMARY_500: Color = Color::from_rgb(0.388, 0.400, 0.945); // #6366f1
    pub const PRIMARY_600: Color = Color::from_rgb(0.310, 0.275, 0.898); // #4f46e5
    pub const PRIMARY_700: Color = Color::from_rgb(0.263, 0.220, 0.792); // #4338ca

    // Semantic colors (toast backgrounds)
    pub const SUCCESS_500: Color = Color::from_rgb(0.063, 0.725, 0.506); // #10b981
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // #ef4444
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3b82f6
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar background once the page has scrolled past the threshold.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const INPUT_HEIGHT: f32 = 44.0;

    /// Fixed navbar height. Overlays below it start from here.
    pub const NAVBAR_HEIGHT: f32 = 70.0;

    /// Back-to-top button diameter.
    pub const BACK_TO_TOP: f32 = 48.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const MENU_PANEL_WIDTH: f32 = 260.0;

    /// Below this window width the navbar collapses into the hamburger.
    pub const COMPACT_BREAKPOINT: f32 = 768.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero headline
    //! - Titles: section headings and card titles
    //! - Body: paragraphs, labels, form inputs
    //! - Caption: dates and small print

    /// Hero headline driven by the typewriter
    pub const DISPLAY: f32 = 48.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 32.0;

    /// Medium title - Brand, stat values
    pub const TITLE_MD: f32 = 24.0;

    /// Small title - Card titles, close glyph
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Hero subtitle, form inputs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most text
    pub const BODY: f32 = 14.0;

    /// Caption - Dates, footer
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Inputs, cards
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Outline buttons, active link underline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::COMPACT_BREAKPOINT);
    assert!(sizing::NAVBAR_HEIGHT > sizing::BUTTON_HEIGHT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn toast_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
        assert_ne!(palette::ERROR_500, palette::INFO_500);
        assert!(palette::SUCCESS_500.g > palette::SUCCESS_500.r);
        assert!(palette::ERROR_500.r > palette::ERROR_500.b);
        assert!(palette::INFO_500.b > palette::INFO_500.r);
    }
}
