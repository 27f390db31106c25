//! High-level badge generation.
//!
//! These functions string the pipeline together: encode, optional logo
//! overlay, inner frame, optional caption frame, save.

use std::fs;
use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info};

use crate::error::Result;
use crate::font::load_caption_font;
use crate::matrix::QrMatrix;
use crate::options::RenderOptions;
use crate::style::{frame_inner, frame_outer_with_caption, overlay_logo};

/// Side length, in bordered module coordinates, of the inset kept around the
/// cleared logo window. Matches a 48 px logo at the default 10 px box size
/// on typical symbol sizes.
const LOGO_WINDOW_INSET: u32 = 15;

/// Generates a badge image from `data`.
///
/// # Arguments
///
/// * `data` - The data (URL, text, etc.) to encode.
/// * `caption` - Optional text displayed in a band below the QR code. The
///   caption font is resolved via [`load_caption_font`], so this fails with
///   [`Error::FontNotFound`](crate::Error::FontNotFound) when no font is
///   available and `font` is `None`.
/// * `logo` - Optional path to a logo composited onto the center.
/// * `font` - Optional caption font path, overriding discovery.
/// * `opts` - Rendering parameters.
///
/// # Example
///
/// ```no_run
/// use qrbadge::{helper::generate_badge, RenderOptions};
///
/// let opts = RenderOptions::default();
/// let img = generate_badge("https://example.com", None, None, None, &opts).unwrap();
/// img.save("qr.png").unwrap();
/// ```
pub fn generate_badge(
    data: &str,
    caption: Option<&str>,
    logo: Option<&Path>,
    font: Option<&Path>,
    opts: &RenderOptions,
) -> Result<RgbaImage> {
    let mut matrix = QrMatrix::encode(data, opts)?;
    compose_badge(&mut matrix, caption, logo, font, opts)
}

/// Composites an already-encoded matrix into a badge image.
///
/// When a logo is given the matrix is mutated in place: its center window is
/// cleared before rasterization, so afterwards the matrix matches the symbol
/// that ended up in the image.
pub fn compose_badge(
    matrix: &mut QrMatrix,
    caption: Option<&str>,
    logo: Option<&Path>,
    font: Option<&Path>,
    opts: &RenderOptions,
) -> Result<RgbaImage> {
    // Resolve the font up front so a missing font fails before any pixels
    // are produced.
    let caption_font = match caption {
        Some(_) => Some(load_caption_font(font)?),
        None => None,
    };

    let mut img = if let Some(logo_path) = logo {
        matrix.clear_center(LOGO_WINDOW_INSET);
        let mut img = matrix.to_image(opts.box_size);
        overlay_logo(&mut img, logo_path, opts.logo_size)?;
        img
    } else {
        matrix.to_image(opts.box_size)
    };
    debug!(width = img.width(), height = img.height(), "rasterized");

    img = frame_inner(&img, opts.corner_radius, opts.inner_border_size);

    if let (Some(text), Some(font)) = (caption, caption_font.as_ref()) {
        img = frame_outer_with_caption(
            &img,
            text,
            font,
            opts.corner_radius,
            opts.outer_border_size,
        );
    }

    Ok(img)
}

/// Generates a badge and writes it to `path`, creating the parent directory
/// if it does not exist. The output format follows the file extension.
///
/// Returns the encoded matrix, with the logo window already cleared when a
/// logo was composited, so callers can render a console preview of exactly
/// the symbol that was saved.
pub fn generate_and_save(
    data: &str,
    caption: Option<&str>,
    logo: Option<&Path>,
    font: Option<&Path>,
    opts: &RenderOptions,
    path: &Path,
) -> Result<QrMatrix> {
    let mut matrix = QrMatrix::encode(data, opts)?;
    let img = compose_badge(&mut matrix, caption, logo, font, opts)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    img.save(path)?;
    info!(path = %path.display(), "badge saved");
    Ok(matrix)
}
