// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::footer;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Footer(footer::Message),
    Notification(notifications::NotificationMessage),
    /// Return to the previous in-app route.
    Back,
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SITE_FOOTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override. Takes precedence over `settings.toml`.
    pub theme: Option<ThemeMode>,
}
