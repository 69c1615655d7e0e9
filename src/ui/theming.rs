// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color roles the footer reads from, resolved per mode.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Footer band background ("secondary" surface).
    pub surface_secondary: Color,
    /// Input field background.
    pub surface_input: Color,

    pub text_primary: Color,
    /// Tagline, blurb and bottom bar text.
    pub text_muted: Color,

    /// Logo, link hover and primary button.
    pub brand_primary: Color,
    pub border: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_secondary: palette::GRAY_100,
            surface_input: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_muted: palette::GRAY_700,
            brand_primary: palette::PRIMARY_600,
            border: palette::GRAY_200,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            surface_input: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_muted: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            border: palette::GRAY_700,
        }
    }

    /// Picks the scheme matching an Iced theme by background luminance.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        let bg = theme.extended_palette().background.base.color;
        if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// `System` asks the desktop; an undetectable preference counts as dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Resolves the Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Error returned when a theme mode string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeModeError(String);

impl fmt::Display for ParseThemeModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid theme_mode: {} (expected light, dark or system)",
            self.0
        )
    }
}

impl std::error::Error for ParseThemeModeError {}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(ParseThemeModeError(s.to_string())),
        }
    }
}
