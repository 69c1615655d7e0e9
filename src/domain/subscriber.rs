// SPDX-License-Identifier: MPL-2.0
//! Newsletter subscriber email.
//!
//! The check is a coarse character-class filter, not an RFC 5322 grammar:
//! the address must contain at least one `@` and consist only of Thai
//! characters (U+0E00..=U+0E7F), ASCII letters, ASCII digits, `@` and `.`.
//! Repeated `@`/`.` and a missing domain suffix are accepted. Nothing is
//! trimmed, so whitespace anywhere rejects the address.

use std::fmt;
use std::ops::RangeInclusive;

/// Unicode block reserved for Thai script.
pub const THAI_BLOCK: RangeInclusive<char> = '\u{0E00}'..='\u{0E7F}';

/// Reasons a submitted address is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionError {
    /// Nothing was typed.
    Empty,
    /// Missing `@`, or a character outside the allowed set.
    Malformed,
}

impl fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionError::Empty => write!(f, "Email is required"),
            SubscriptionError::Malformed => write!(
                f,
                "Invalid email. Only Thai, English letters, and numbers are allowed."
            ),
        }
    }
}

impl std::error::Error for SubscriptionError {}

/// An address that passed [`SubscriberEmail::parse`].
///
/// Holds the input verbatim so it can be echoed back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Validates raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionError::Empty`] for an empty string and
    /// [`SubscriptionError::Malformed`] for anything else that fails the
    /// character-class filter.
    pub fn parse(input: &str) -> Result<Self, SubscriptionError> {
        if input.is_empty() {
            return Err(SubscriptionError::Empty);
        }

        if !input.contains('@') || !input.chars().all(is_allowed_char) {
            return Err(SubscriptionError::Malformed);
        }

        Ok(Self(input.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns whether `c` may appear in a subscriber address.
#[must_use]
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || THAI_BLOCK.contains(&c) || c == '@' || c == '.'
}
