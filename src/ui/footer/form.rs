// SPDX-License-Identifier: MPL-2.0
//! Newsletter subscription form.
//!
//! Submission is synchronous: the current input is validated and turned into
//! a notification. The field is cleared on success only, so a rejected
//! address stays in place for correction.

use super::{Message, State};
use crate::app::config;
use crate::domain::subscriber::SubscriberEmail;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

pub const HEADING: &str = "Newsletter";
pub const BLURB: &str = "Subscribe to get updates on new tools and offers.";
pub const PLACEHOLDER: &str = "Enter your email";
pub const SUBMIT_LABEL: &str = "Subscribe";
pub const SUCCESS_TITLE: &str = "Subscribed!";

impl State {
    /// Validates the current input and reports the outcome.
    ///
    /// Rejections auto-dismiss after [`config::VALIDATION_ERROR_DISMISS`].
    pub fn submit(&mut self) -> Notification {
        match SubscriberEmail::parse(&self.email) {
            Ok(email) => {
                tracing::info!(length = email.as_str().chars().count(), "subscription accepted");
                let notification = Notification::success(SUCCESS_TITLE)
                    .with_description(format!("Email {email} has been subscribed!"));
                self.email.clear();
                notification
            }
            Err(err) => {
                tracing::debug!(%err, "subscription rejected");
                Notification::error(err.to_string()).auto_dismiss(config::VALIDATION_ERROR_DISMISS)
            }
        }
    }
}

/// Heading, blurb, email input and submit button.
pub fn section<'a>(email: &'a str) -> Element<'a, Message> {
    let input = text_input(PLACEHOLDER, email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill)
        .style(styles::input::email);

    let submit = button(Text::new(SUBMIT_LABEL).size(typography::BODY))
        .on_press(Message::Submit)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let controls = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(submit);

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(HEADING).size(typography::TITLE_SM))
        .push(Text::new(BLURB).size(typography::BODY_SM))
        .push(controls)
        .into()
}
