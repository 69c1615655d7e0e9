// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`footer`] - Site footer with link lists and the newsletter form
//! - [`notifications`] - Toast notification system for user feedback
//! - [`navigation`] - Link destinations and in-app routing
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, inputs, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod footer;
pub mod icons;
pub mod navigation;
pub mod notifications;
pub mod styles;
pub mod theming;
