// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the footer and its toasts.
//!
//! Raw colors live in [`palette`]; widgets should usually read them through
//! [`crate::ui::theming::ColorScheme`] so light and dark modes stay in sync.
//! Lengths follow a 4px grid.
//!
//! ```
//! use site_footer::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let hover_wash = Color { a: opacity::OVERLAY_SUBTLE, ..palette::GRAY_400 };
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.93);

    /// Safety orange, lightest to darkest.
    pub const PRIMARY_400: Color = Color::from_rgb(1.0, 0.62, 0.25);
    pub const PRIMARY_500: Color = Color::from_rgb(0.96, 0.5, 0.1);
    pub const PRIMARY_600: Color = Color::from_rgb(0.85, 0.42, 0.05);
    pub const PRIMARY_700: Color = Color::from_rgb(0.7, 0.33, 0.02);

    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.2, 0.2);
    pub const WARNING_500: Color = Color::from_rgb(0.92, 0.7, 0.03);
    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.7, 0.36);
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
}

pub mod opacity {
    /// Hover wash behind icon buttons.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Pressed wash behind icon buttons.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const SHADOW: f32 = 0.25;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    /// Social and toast severity icons.
    pub const ICON_MD: f32 = 20.0;
    /// Logo.
    pub const ICON_LG: f32 = 32.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    /// Footer content is centered and capped at this width.
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
}

pub mod typography {
    /// Brand name next to the logo.
    pub const TITLE_LG: f32 = 24.0;
    /// Column headings.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    /// Links, tagline, toast descriptions.
    pub const BODY_SM: f32 = 13.0;
    /// Bottom bar and tooltips.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Inputs at rest, tooltip outline.
    pub const WIDTH_SM: f32 = 1.0;
    /// Focused input, toast outline.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    const TINT: Color = Color {
        a: opacity::SHADOW,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);
    assert!(spacing::XL < spacing::XXL);

    assert!(sizing::ICON_SM < sizing::ICON_MD);
    assert!(sizing::ICON_MD < sizing::ICON_LG);
    assert!(sizing::TOAST_WIDTH < sizing::CONTENT_MAX_WIDTH);

    assert!(typography::CAPTION < typography::BODY_SM);
    assert!(typography::BODY_SM < typography::BODY);
    assert!(typography::BODY < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
};
