// SPDX-License-Identifier: MPL-2.0
//! Site footer component.
//!
//! Renders the brand block, the company and support link lists, the
//! newsletter form and the bottom bar. The only local state is the email
//! field; everything else comes from [`SiteInfo`] by reference.
//!
//! Link presses and form submissions are reported to the parent as
//! [`Event`]s so the shell decides how to route or display them.

pub mod form;
mod view;

use crate::app::config;
use crate::site::SiteInfo;
use crate::ui::navigation::Destination;
use crate::ui::notifications::Notification;

pub use view::view;

/// Label and destination of the bottom bar links, in display order.
pub const LEGAL_LINKS: [(&str, &str); 2] = [
    ("Terms of Service", "/terms"),
    ("Privacy Policy", "/privacy"),
];

/// Contextual data needed to render the footer.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub site: &'a SiteInfo,
    pub email: &'a str,
    /// Calendar year shown in the copyright line.
    pub year: i32,
    /// Width available to the footer, in logical pixels.
    pub width: f32,
}

/// Local state of the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Controlled value of the newsletter input.
    pub email: String,
}

/// Messages emitted by the footer widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    EmailChanged(String),
    Submit,
    LinkPressed(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
    Navigate(Destination),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Process a footer message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::Submit => Event::Notify(state.submit()),
        Message::LinkPressed(href) => Event::Navigate(Destination::parse(&href)),
    }
}

/// Number of grid columns for the four footer sections at `width`.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    if width < config::BREAKPOINT_MEDIUM {
        1
    } else if width < config::BREAKPOINT_LARGE {
        2
    } else {
        4
    }
}

/// Text of the bottom bar's copyright notice.
#[must_use]
pub fn copyright_line(year: i32, name: &str) -> String {
    format!("© {year} {name}. All rights reserved.")
}
