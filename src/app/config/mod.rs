// SPDX-License-Identifier: MPL-2.0
//! `settings.toml`: theme mode and site identity overrides.
//!
//! ```toml
//! [general]
//! theme_mode = "dark"
//!
//! [site]
//! name = "Hammer Hire"
//! support_links = [{ label = "FAQ", href = "/faq" }]
//! ```
//!
//! Every key is optional; anything left out falls back to [`defaults`].
//! The file lives in the directory resolved by [`crate::app::paths`]
//! (`--config-dir`, then `SITE_FOOTER_CONFIG_DIR`, then the platform config
//! directory). [`load_from_path`] skips resolution. The application only
//! reads this file; it is edited by hand.
//!
//! ```no_run
//! use site_footer::config;
//!
//! let (settings, warning) = config::load_with_override(None);
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("theme: {:?}", settings.general.theme_mode);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::site::LinkRecord;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// `light`, `dark` or `system`, case-insensitive.
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Site identity overrides. `None` keeps the built-in value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localized: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_links: Option<Vec<LinkRecord>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_links: Option<Vec<LinkRecord>>,
}

/// Parsed `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub site: SiteConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads settings from `base_dir`, or from the resolved config directory
/// when it is `None`.
///
/// Never fails: an unreadable or invalid file yields the defaults plus a
/// user-facing warning. A missing file is not a problem and yields no warning.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded configuration");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default configuration");
            (
                Config::default(),
                Some(format!("Settings could not be read, defaults are in use. {err}")),
            )
        }
    }
}

/// Reads and parses the file at `path`.
///
/// # Errors
///
/// [`crate::error::Error::Io`] when the file cannot be read,
/// [`crate::error::Error::Config`] when its contents do not parse.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
