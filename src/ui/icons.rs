// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded as SVG source and their handles are cached using
//! `OnceLock`, so each document is parsed once. Stroke icons are drawn in
//! black and recolored at render time through [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Wraps 24x24 stroke-icon path data in an SVG document.
macro_rules! stroke_svg {
    ($body:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
    };
}

/// Defines an icon function returning an `Svg` with a cached handle.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

/// Site logo (wrench), in brand orange. Also rasterized for the window icon.
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#F5801A" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/></svg>"##;

// =============================================================================
// Brand
// =============================================================================

define_icon!(logo, LOGO_SVG, "Wrench logo.");

// =============================================================================
// Social
// =============================================================================

define_icon!(
    facebook,
    stroke_svg!(r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#),
    "Facebook \"f\" mark."
);
define_icon!(
    twitter,
    stroke_svg!(r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#),
    "Twitter bird."
);
define_icon!(
    instagram,
    stroke_svg!(r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#),
    "Instagram camera outline."
);
define_icon!(
    linkedin,
    stroke_svg!(r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#),
    "LinkedIn \"in\" mark."
);

// =============================================================================
// Status
// =============================================================================

define_icon!(
    checkmark,
    stroke_svg!(r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#),
    "Check mark in a circle."
);
define_icon!(
    info,
    stroke_svg!(r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#),
    "Letter i in a circle."
);
define_icon!(
    warning,
    stroke_svg!(r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#),
    "Exclamation mark in a triangle."
);
define_icon!(
    alert,
    stroke_svg!(r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#),
    "Exclamation mark in a circle."
);
define_icon!(
    cross,
    stroke_svg!(r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#),
    "Diagonal cross."
);

// =============================================================================
// Helpers
// =============================================================================

/// Sets a square size on an icon.
#[must_use]
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon with a fixed color, overriding the hover state too.
#[must_use]
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_svg_wraps_body() {
        let doc = stroke_svg!("<circle/>");
        assert!(doc.starts_with("<svg"));
        assert!(doc.ends_with("<circle/></svg>"));
    }

    #[test]
    fn logo_source_is_standalone_svg() {
        assert!(LOGO_SVG.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(LOGO_SVG.contains("viewBox=\"0 0 24 24\""));
    }

    #[test]
    fn icons_are_constructible() {
        let _ = sized(logo(), 32.0);
        let _ = tinted(facebook(), Color::BLACK);
        let _ = twitter();
        let _ = instagram();
        let _ = linkedin();
        let _ = checkmark();
        let _ = info();
        let _ = warning();
        let _ = alert();
        let _ = cross();
    }

    #[test]
    fn icons_live_inside_borrowed_rows() {
        fn labelled(label: &str) -> iced::Element<'_, ()> {
            iced::widget::row![
                tinted(sized(cross(), 16.0), Color::BLACK),
                iced::widget::text(label)
            ]
            .into()
        }

        let label = String::from("Dismiss");
        let _ = labelled(&label);
    }
}
