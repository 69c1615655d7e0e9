// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.
//!
//! # Categories
//!
//! - **Site**: Display names, tagline and footer link lists
//! - **Notifications**: Toast timing
//! - **Layout**: Responsive breakpoints for the footer grid

use std::time::Duration;

// ==========================================================================
// Site Defaults
// ==========================================================================

/// Primary site name shown in the brand block, title bar and copyright line.
pub const DEFAULT_SITE_NAME: &str = "ToolTime Rentals";

/// Secondary (Thai) site name shown under the primary one.
pub const DEFAULT_SITE_NAME_LOCALIZED: &str = "ทูลไทม์ เช่าเครื่องมือ";

/// Short description shown under the logo.
pub const DEFAULT_TAGLINE: &str =
    "Your one-stop solution for tool rentals. Quality tools for every project.";

/// Company column, as `(label, href)` pairs in display order.
pub const DEFAULT_COMPANY_LINKS: &[(&str, &str)] = &[
    ("About Us", "/about"),
    ("Careers", "/careers"),
    ("Blog", "/blog"),
    ("Contact Us", "/contact"),
];

/// Support column, as `(label, href)` pairs in display order.
pub const DEFAULT_SUPPORT_LINKS: &[(&str, &str)] = &[
    ("FAQ", "/faq"),
    ("How It Works", "/how-it-works"),
    ("Rental Policy", "/rental-policy"),
    ("Help Center", "/help"),
];

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay applied to form validation errors.
///
/// Errors otherwise wait for a manual dismiss.
pub const VALIDATION_ERROR_DISMISS: Duration = Duration::from_secs(5);

/// Interval of the tick driving toast auto-dismiss.
pub const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Width below which the footer stacks its sections in one column.
pub const BREAKPOINT_MEDIUM: f32 = 768.0;

/// Width from which the footer lays its sections out in four columns.
pub const BREAKPOINT_LARGE: f32 = 1024.0;

const _: () = {
    assert!(BREAKPOINT_MEDIUM < BREAKPOINT_LARGE);
    assert!(!DEFAULT_COMPANY_LINKS.is_empty());
    assert!(!DEFAULT_SUPPORT_LINKS.is_empty());
};
