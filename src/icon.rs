// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the logo SVG at runtime to produce a RGBA icon for the window
//! title bar. Falls back to `None` if rendering fails.

use crate::ui::icons::LOGO_SVG;
use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the logo to a 128x128 RGBA buffer.
#[must_use]
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize_logo(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

/// Renders the logo into a square RGBA buffer of `size` x `size` pixels.
fn rasterize_logo(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(LOGO_SVG.as_bytes(), &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse logo SVG");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = size as f32 / orig_size.width();
    let scale_y = size as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.data().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_to_rgba() {
        let data = rasterize_logo(32).expect("logo should render");
        assert_eq!(data.len(), 32 * 32 * 4);
        // The stroke must have produced at least one opaque pixel.
        assert!(data.chunks_exact(4).any(|px| px[3] > 0));
    }

    #[test]
    fn window_icon_loads() {
        assert!(load_window_icon().is_some());
    }
}
