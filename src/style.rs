//! Badge styling: logo overlay, rounded-corner frames, and the caption band.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::debug;

use crate::error::Result;
use crate::matrix::{BLACK, WHITE};

/// Height of the caption band appended below the framed QR code, in pixels.
pub const CAPTION_BAND: u32 = 70;

/// Caption font size, in pixels.
pub const CAPTION_FONT_SIZE: f32 = 25.0;

/// Whether the pixel at `(x, y)` lies inside the rounded rectangle covering
/// an image of `width × height` with the given corner radius.
///
/// The radius is clamped to half the smaller dimension, so an oversized
/// radius degenerates to a capsule rather than producing artifacts.
fn in_rounded_rect(x: u32, y: u32, width: u32, height: u32, radius: u32) -> bool {
    let r = radius
        .min(width.saturating_sub(1) / 2)
        .min(height.saturating_sub(1) / 2) as i64;
    if r == 0 {
        return true;
    }
    let (x, y) = (x as i64, y as i64);
    let cx = x.clamp(r, width as i64 - 1 - r);
    let cy = y.clamp(r, height as i64 - 1 - r);
    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= r * r
}

/// Loads the logo, resizes it to `logo_size × logo_size` (Lanczos), and
/// alpha-composites it onto the center of `img`.
pub fn overlay_logo(img: &mut RgbaImage, logo_path: &Path, logo_size: u32) -> Result<()> {
    let logo = image::open(logo_path)?
        .resize_exact(logo_size, logo_size, FilterType::Lanczos3)
        .to_rgba8();
    let x = img.width().saturating_sub(logo_size) / 2;
    let y = img.height().saturating_sub(logo_size) / 2;
    debug!(x, y, logo_size, "compositing logo");
    imageops::overlay(img, &logo, x as i64, y as i64);
    Ok(())
}

/// Places `img` on a white rounded-rectangle card inset by `border` pixels.
///
/// Pixels outside the rounded rectangle are black, so the card shows dark
/// corners at radius > 0.
pub fn frame_inner(img: &RgbaImage, radius: u32, border: u32) -> RgbaImage {
    let width = img.width() + 2 * border;
    let height = img.height() + 2 * border;
    let mut out = RgbaImage::from_fn(width, height, |x, y| {
        if in_rounded_rect(x, y, width, height, radius) {
            WHITE
        } else {
            BLACK
        }
    });
    imageops::overlay(&mut out, img, border as i64, border as i64);
    out
}

/// Places `img` on a black rounded-rectangle card inset by `border` pixels,
/// extends it downward by [`CAPTION_BAND`], and draws `caption` centered in
/// the band in white.
pub fn frame_outer_with_caption(
    img: &RgbaImage,
    caption: &str,
    font: &FontVec,
    radius: u32,
    border: u32,
) -> RgbaImage {
    let width = img.width() + 2 * border;
    let height = img.height() + 2 * border + CAPTION_BAND;
    let mut out = RgbaImage::from_fn(width, height, |x, y| {
        if in_rounded_rect(x, y, width, height, radius) {
            BLACK
        } else {
            WHITE
        }
    });
    imageops::overlay(&mut out, img, border as i64, border as i64);

    let scale = PxScale::from(CAPTION_FONT_SIZE);
    let (text_width, text_height) = text_size(scale, font, caption);
    let x = width.saturating_sub(text_width) / 2;
    let y = img.height() + border + CAPTION_BAND.saturating_sub(text_height) / 2;
    debug!(x, y, text_width, "drawing caption");
    draw_text_mut(&mut out, WHITE, x as i32, y as i32, scale, font, caption);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::load_caption_font;

    #[test]
    fn rounded_rect_radius_zero_covers_everything() {
        assert!(in_rounded_rect(0, 0, 100, 100, 0));
        assert!(in_rounded_rect(99, 99, 100, 100, 0));
    }

    #[test]
    fn rounded_rect_excludes_corners_only() {
        assert!(!in_rounded_rect(0, 0, 100, 100, 10));
        assert!(!in_rounded_rect(99, 0, 100, 100, 10));
        assert!(!in_rounded_rect(0, 99, 100, 100, 10));
        assert!(!in_rounded_rect(99, 99, 100, 100, 10));
        // Edge midpoints and center stay inside.
        assert!(in_rounded_rect(50, 0, 100, 100, 10));
        assert!(in_rounded_rect(0, 50, 100, 100, 10));
        assert!(in_rounded_rect(50, 50, 100, 100, 10));
        // On the circular arc.
        assert!(in_rounded_rect(10, 10, 100, 100, 10));
    }

    #[test]
    fn rounded_rect_clamps_oversized_radius() {
        // Radius beyond half the image must not reject interior pixels.
        assert!(in_rounded_rect(50, 50, 100, 100, 500));
        assert!(!in_rounded_rect(0, 0, 100, 100, 500));
    }

    #[test]
    fn frame_inner_dimensions_and_colors() {
        let qr = RgbaImage::from_pixel(60, 60, BLACK);
        let framed = frame_inner(&qr, 10, 15);
        assert_eq!(framed.dimensions(), (90, 90));
        assert_eq!(*framed.get_pixel(0, 0), BLACK); // outside the rounding
        assert_eq!(*framed.get_pixel(45, 0), WHITE); // top border
        assert_eq!(*framed.get_pixel(45, 45), BLACK); // pasted QR content
    }

    #[test]
    fn frame_inner_square_when_radius_zero() {
        let qr = RgbaImage::from_pixel(60, 60, BLACK);
        let framed = frame_inner(&qr, 0, 15);
        assert_eq!(*framed.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn overlay_logo_centers_resized_image() {
        let dir = tempfile::tempdir().unwrap();
        let logo_path = dir.path().join("logo.png");
        let red = image::Rgba([255, 0, 0, 255]);
        RgbaImage::from_pixel(16, 16, red).save(&logo_path).unwrap();

        let mut img = RgbaImage::from_pixel(100, 100, WHITE);
        overlay_logo(&mut img, &logo_path, 48).unwrap();
        assert_eq!(*img.get_pixel(50, 50), red);
        // Outside the 48x48 centered window the canvas is untouched.
        assert_eq!(*img.get_pixel(10, 10), WHITE);
        assert_eq!(*img.get_pixel(90, 90), WHITE);
    }

    #[test]
    fn overlay_logo_missing_file_is_an_error() {
        let mut img = RgbaImage::from_pixel(100, 100, WHITE);
        let err = overlay_logo(&mut img, Path::new("/nonexistent/logo.png"), 48);
        assert!(err.is_err());
    }

    #[test]
    fn caption_frame_adds_band_and_borders() {
        let Ok(font) = load_caption_font(None) else {
            return; // no system font on this machine
        };
        let qr = RgbaImage::from_pixel(60, 60, WHITE);
        let framed = frame_outer_with_caption(&qr, "example.com", &font, 10, 15);
        assert_eq!(framed.dimensions(), (90, 90 + CAPTION_BAND));
        assert_eq!(*framed.get_pixel(0, 0), WHITE); // page corner
        assert_eq!(*framed.get_pixel(45, 5), BLACK); // card border
        // Away from the rounded corners the band is black card, so any
        // non-black pixel there must belong to the caption glyphs.
        let lit = (80..135u32)
            .flat_map(|y| (20..70u32).map(move |x| (x, y)))
            .any(|(x, y)| *framed.get_pixel(x, y) != BLACK);
        assert!(lit, "caption drew no pixels");
    }
}
