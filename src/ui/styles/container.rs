// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container::Style;
use iced::{Background, Border, Color, Theme};

/// Footer band: secondary surface with matching text color.
pub fn footer(theme: &Theme) -> Style {
    let scheme = ColorScheme::for_theme(theme);

    Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: Some(scheme.text_primary),
        ..Style::default()
    }
}

/// Toast card: page background, severity-colored outline.
pub fn toast(theme: &Theme, accent: Color) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn footer_band_differs_between_themes() {
        let light = footer(&Theme::Light);
        let dark = footer(&Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert!(light.text_color.is_some());
    }

    #[test]
    fn toast_outline_uses_accent() {
        let style = toast(&Theme::Dark, palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }
}
