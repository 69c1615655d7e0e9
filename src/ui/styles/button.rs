// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

/// Subscribe button: solid brand fill, lighter and lifted on hover.
pub fn primary(_theme: &Theme, status: Status) -> Style {
    let (fill, edge, text, lift): (Color, Color, Color, Shadow) = match status {
        Status::Active => (palette::PRIMARY_500, palette::PRIMARY_600, palette::WHITE, shadow::SM),
        Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, palette::WHITE, shadow::MD),
        Status::Pressed => (palette::PRIMARY_600, palette::PRIMARY_700, palette::WHITE, shadow::NONE),
        Status::Disabled => (palette::GRAY_200, palette::GRAY_400, palette::GRAY_400, shadow::NONE),
    };

    Style {
        background: Some(Background::Color(fill)),
        text_color: text,
        border: Border {
            color: edge,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: lift,
        snap: true,
    }
}

/// Text link: no chrome, brand color on hover.
pub fn link(theme: &Theme, status: Status) -> Style {
    let scheme = ColorScheme::for_theme(theme);
    bare(scheme.text_primary, scheme.brand_primary, status)
}

/// Muted text link, used in the bottom bar.
pub fn muted_link(theme: &Theme, status: Status) -> Style {
    let scheme = ColorScheme::for_theme(theme);
    bare(scheme.text_muted, scheme.brand_primary, status)
}

/// Toast close button: invisible until hovered.
pub fn dismiss(theme: &Theme, status: Status) -> Style {
    let scheme = ColorScheme::for_theme(theme);
    let wash = match status {
        Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        Status::Active | Status::Disabled => None,
    };

    Style {
        background: wash.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: scheme.text_primary,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn bare(rest: Color, hover: Color, status: Status) -> Style {
    Style {
        background: None,
        text_color: match status {
            Status::Hovered | Status::Pressed => hover,
            Status::Active | Status::Disabled => rest,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
