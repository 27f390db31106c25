//! QR encoding and rasterization.
//!
//! Encoding is delegated to the [`qrcode`] crate; this module owns the module
//! matrix from that point on, so the logo window can be cleared before the
//! symbol is rasterized.

use image::{Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode, Version};
use tracing::{debug, warn};

use crate::error::Result;
use crate::options::RenderOptions;

pub(crate) const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub(crate) const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// A QR module matrix with its quiet zone baked in.
///
/// Coordinates are in modules and include the quiet-zone border, so `(0, 0)`
/// is the top-left corner of the border, not of the symbol.
#[derive(Debug, Clone)]
pub struct QrMatrix {
    modules: Vec<bool>,
    size: u32,
}

impl QrMatrix {
    /// Encodes `data` into a bordered module matrix.
    ///
    /// When `opts.version` is set it is treated as a minimum: if the data
    /// does not fit that version, the smallest version that holds it is
    /// selected instead.
    pub fn encode(data: &str, opts: &RenderOptions) -> Result<QrMatrix> {
        let ec: EcLevel = opts.ecc.into();
        let code = match opts.version {
            Some(v) => match QrCode::with_version(data, Version::Normal(v), ec) {
                Ok(code) => code,
                Err(err) => {
                    warn!(version = v, %err, "data does not fit requested version, growing");
                    QrCode::with_error_correction_level(data, ec)?
                }
            },
            None => QrCode::with_error_correction_level(data, ec)?,
        };

        let width = code.width() as u32;
        let size = width + 2 * opts.border;
        debug!(symbol_modules = width, bordered_modules = size, "encoded");

        let mut modules = vec![false; (size * size) as usize];
        for (i, color) in code.to_colors().iter().enumerate() {
            if *color == qrcode::Color::Dark {
                let x = i as u32 % width + opts.border;
                let y = i as u32 / width + opts.border;
                modules[(y * size + x) as usize] = true;
            }
        }
        Ok(QrMatrix { modules, size })
    }

    /// Width (and height) of the matrix in modules, border included.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns whether the module at `(x, y)` is dark. Out-of-range
    /// coordinates are light.
    pub fn module(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.size as i64 || y >= self.size as i64 {
            return false;
        }
        self.modules[(y as u32 * self.size + x as u32) as usize]
    }

    /// Blanks the centered square of modules whose coordinates both lie in
    /// `[quiet_zone, size - quiet_zone)`, making room for a logo overlay.
    ///
    /// A no-op when the matrix is too small to contain such a square.
    pub fn clear_center(&mut self, quiet_zone: u32) {
        if 2 * quiet_zone >= self.size {
            debug!(quiet_zone, size = self.size, "matrix too small, logo window not cleared");
            return;
        }
        for y in quiet_zone..self.size - quiet_zone {
            for x in quiet_zone..self.size - quiet_zone {
                self.modules[(y * self.size + x) as usize] = false;
            }
        }
    }

    /// Rasterizes the matrix, rendering each module as a `box_size` pixel
    /// square: dark modules black, light modules white.
    pub fn to_image(&self, box_size: u32) -> RgbaImage {
        let px = self.size * box_size;
        let mut img = RgbaImage::new(px, px);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = if self.module((x / box_size) as i64, (y / box_size) as i64) {
                BLACK
            } else {
                WHITE
            };
        }
        img
    }

    /// Renders the matrix as Unicode half-block text, two module rows per
    /// output line.
    pub fn render_console(&self) -> String {
        let mut out = String::new();
        for y in (0..self.size as i64).step_by(2) {
            for x in 0..self.size as i64 {
                let top = self.module(x, y);
                let bottom = self.module(x, y + 1);
                out.push(match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            out.push('\n');
        }
        out
    }
}
