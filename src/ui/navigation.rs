// SPDX-License-Identifier: MPL-2.0
//! Link destinations and in-app routing.
//!
//! Footer links carry raw `href` strings. [`Destination::parse`] sorts them
//! into placeholders (`#`), in-app paths (`/terms`) and external targets
//! (`https://...`, `mailto:...`). The [`Router`] only follows in-app paths;
//! external targets are handed back to the caller.

use crate::ui::footer::Message;
use crate::ui::styles;
use iced::widget::button;
use iced::Element;
use std::collections::VecDeque;
use std::fmt;

/// Number of previous routes kept for [`Router::back`].
const MAX_HISTORY: usize = 32;

/// Root route.
pub const HOME: &str = "/";

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// `#` or empty: the link is not wired up yet.
    Placeholder,
    /// Path inside the site, always starting with `/`.
    Internal(String),
    /// Anything else, opened outside the app.
    External(String),
}

impl Destination {
    #[must_use]
    pub fn parse(href: &str) -> Self {
        let href = href.trim();
        if href.is_empty() || href == "#" {
            Destination::Placeholder
        } else if href.starts_with('/') {
            Destination::Internal(href.to_string())
        } else {
            Destination::External(href.to_string())
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Placeholder => f.write_str("#"),
            Destination::Internal(path) | Destination::External(path) => f.write_str(path),
        }
    }
}

/// Clickable, link-styled content that emits [`Message::LinkPressed`].
pub fn link<'a>(content: impl Into<Element<'a, Message>>, href: &str) -> Element<'a, Message> {
    button(content)
        .padding(0)
        .style(styles::button::link)
        .on_press(Message::LinkPressed(href.to_string()))
        .into()
}

/// Current in-app route plus a bounded back stack.
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    history: VecDeque<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: HOME.to_string(),
            history: VecDeque::new(),
        }
    }
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Follows `destination`. Returns whether the current route changed.
    ///
    /// Placeholders and external targets never change the route.
    pub fn navigate(&mut self, destination: &Destination) -> bool {
        match destination {
            Destination::Placeholder => {
                tracing::debug!("ignoring placeholder link");
                false
            }
            Destination::External(url) => {
                tracing::info!(%url, "external link requested");
                false
            }
            Destination::Internal(path) => {
                if *path == self.current {
                    return false;
                }
                if self.history.len() == MAX_HISTORY {
                    self.history.pop_front();
                }
                let previous = std::mem::replace(&mut self.current, path.clone());
                self.history.push_back(previous);
                tracing::info!(route = %self.current, "navigated");
                true
            }
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns to the previous route. Returns whether the route changed.
    pub fn back(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}
