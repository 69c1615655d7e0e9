// SPDX-License-Identifier: MPL-2.0
//! `site_footer` is the marketing footer of a tool rental site built with
//! the Iced GUI framework.
//!
//! It renders branding, social and navigation links, and a newsletter form
//! whose submissions are validated locally and reported through toast
//! notifications.

#![doc(html_root_url = "https://docs.rs/site_footer/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod icon;
pub mod site;
pub mod ui;

pub use app::config;
