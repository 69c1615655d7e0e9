// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Iced has no accessibility tree, so icon-only links expose their
//! accessible name ("Facebook page", ...) as a hover tooltip instead.

use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Inverted surface so the label stands out from the footer band.
pub fn label_container(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.text_primary)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: scheme.border,
        },
        shadow: shadow::SM,
        text_color: Some(scheme.surface_secondary),
        ..Default::default()
    }
}

/// Wraps `content` with a label shown below it on hover.
pub fn labeled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(label_container);

    tooltip(content, tip, tooltip::Position::Bottom).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_inverts_footer_colors() {
        let style = label_container(&Theme::Light);
        let scheme = ColorScheme::light();

        assert_eq!(style.background, Some(Background::Color(scheme.text_primary)));
        assert_eq!(style.text_color, Some(scheme.surface_secondary));
    }

    #[test]
    fn label_has_shadow() {
        assert!(label_container(&Theme::Dark).shadow.blur_radius > 0.0);
    }
}
