// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! First match wins:
//! 1. a directory passed to [`get_app_config_dir_with_override`], which is
//!    where `--config-dir` ends up
//! 2. `SITE_FOOTER_CONFIG_DIR`, when set and non-empty
//! 3. `<platform config dir>/SiteFooter`

use std::path::PathBuf;

const APP_DIR_NAME: &str = "SiteFooter";

pub const ENV_CONFIG_DIR: &str = "SITE_FOOTER_CONFIG_DIR";

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolves the config directory, `override_path` first.
///
/// `None` only when nothing is overridden and the platform has no notion of
/// a config directory.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_DIR_NAME)))
}
