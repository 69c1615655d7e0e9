// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Theme};

/// Email field: input surface, thin border that turns brand-colored on focus.
pub fn email(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let scheme = ColorScheme::for_theme(theme);
    let base = text_input::default(theme, status);

    let focused = !matches!(
        status,
        text_input::Status::Active | text_input::Status::Hovered | text_input::Status::Disabled
    );

    let (border_color, border_width) = if focused {
        (scheme.brand_primary, border::WIDTH_MD)
    } else {
        (scheme.border, border::WIDTH_SM)
    };

    text_input::Style {
        background: Background::Color(scheme.surface_input),
        border: Border {
            color: border_color,
            width: border_width,
            radius: radius::SM.into(),
        },
        value: scheme.text_primary,
        placeholder: scheme.text_muted,
        ..base
    }
}
