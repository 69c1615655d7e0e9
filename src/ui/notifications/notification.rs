// SPDX-License-Identifier: MPL-2.0
//! A single toast: what it says, how loud it is and when it goes away.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// How long success and info toasts stay up.
const SHORT_DISPLAY: Duration = Duration::from_secs(3);
/// How long warning toasts stay up.
const LONG_DISPLAY: Duration = Duration::from_secs(5);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique toast identifier, used to dismiss a specific toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    /// Stays until dismissed unless the toast sets its own lifetime.
    Error,
}

impl Severity {
    /// Accent used for the toast border and icon.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Default lifetime of a toast with this severity.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(SHORT_DISPLAY),
            Severity::Warning => Some(LONG_DISPLAY),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: String,
    description: Option<String>,
    created_at: Instant,
    /// Start of the on-screen lifetime; later than `created_at` for toasts
    /// that waited in the queue.
    shown_at: Instant,
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        let now = Instant::now();
        Self {
            id: NotificationId::next(),
            severity,
            title: title.into(),
            description: None,
            created_at: now,
            shown_at: now,
            custom_dismiss_duration: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Severity::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Severity::Info, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Severity::Error, title)
    }

    /// Second, smaller line under the title.
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    /// Overrides the severity's default lifetime.
    #[must_use]
    pub fn auto_dismiss(self, after: Duration) -> Self {
        Self {
            custom_dismiss_duration: Some(after),
            ..self
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Effective lifetime: the custom one if set, else the severity default.
    #[must_use]
    pub fn dismiss_after(&self) -> Option<Duration> {
        self.custom_dismiss_duration
            .or(self.severity.auto_dismiss_duration())
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Restarts the on-screen lifetime at `now`.
    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at = self.shown_at.max(now);
    }

    /// Whether the toast has been on screen for its whole lifetime at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.dismiss_after()
            .is_some_and(|lifetime| now.saturating_duration_since(self.shown_at) >= lifetime)
    }
}
