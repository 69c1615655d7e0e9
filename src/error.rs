// SPDX-License-Identifier: MPL-2.0
//! Failures while reading or writing `settings.toml`.
//!
//! A rejected email address is not an [`Error`]; the form reports it as a
//! [`crate::domain::subscriber::SubscriptionError`] toast instead.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The file exists but could not be read.
    Io(String),
    /// The file was read but does not describe a valid configuration.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(reason) => write!(f, "settings file is not accessible: {reason}"),
            Self::Config(reason) => write!(f, "settings file is invalid: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
