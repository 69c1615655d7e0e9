// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Each toast is a fixed-width card: severity icon, title with an optional
//! description, and a close button. Toasts stack in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, svg, text, Column, Container, Row, Space, Svg, Text};
use iced::{alignment, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let accent = notification.severity().color();

        let mut body = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(Text::new(notification.title()).size(typography::BODY));
        if let Some(description) = notification.description() {
            body = body.push(
                Text::new(description)
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(ColorScheme::for_theme(theme).text_muted),
                    }),
            );
        }

        let close = button(icons::sized(icons::cross(), sizing::ICON_SM).style(
            |theme: &Theme, _status: svg::Status| svg::Style {
                color: Some(ColorScheme::for_theme(theme).text_primary),
            },
        ))
        .padding(spacing::XXS)
        .style(styles::button::dismiss)
        .on_press(Message::Dismiss(notification.id()));

        let card = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::sized(Self::severity_icon(notification.severity()), sizing::ICON_MD),
                accent,
            ))
            .push(body)
            .push(close);

        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| styles::container::toast(theme, accent))
            .into()
    }

    /// Visible toasts stacked in the bottom-right corner, newest on top.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let stack = manager
            .visible()
            .fold(Column::new().spacing(spacing::XS), |column, toast| {
                column.push(Self::view(toast))
            });

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }

    fn severity_icon<'a>(severity: Severity) -> Svg<'a> {
        match severity {
            Severity::Success => icons::checkmark(),
            Severity::Info => icons::info(),
            Severity::Warning => icons::warning(),
            Severity::Error => icons::alert(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_builds_with_and_without_description() {
        let bare = Notification::error("Email is required");
        let full = Notification::success("Subscribed!")
            .with_description("Email a@b.com has been subscribed!");

        let _ = Toast::view(&bare);
        let _ = Toast::view(&full);
    }

    #[test]
    fn overlay_builds_for_empty_and_full_manager() {
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager);

        for severity in [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            manager.push(Notification::new(severity, format!("{severity:?}")));
        }
        let _ = Toast::view_overlay(&manager);
    }
}
