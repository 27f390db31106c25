//! # qrbadge
//!
//! A Rust library and CLI for generating QR code "badges": a QR symbol with
//! an optional centered logo, rounded-corner borders, and an optional
//! caption band.
//!
//! Encoding is delegated to the [`qrcode`] crate; this crate owns everything
//! after the module matrix exists. The pipeline is strictly sequential:
//!
//! 1. Encode the data into a module matrix (error correction defaults to
//!    High so a logo can cover part of the symbol).
//! 2. Rasterize the matrix at a configurable per-module pixel size.
//! 3. Optionally clear a centered window and composite a logo into it.
//! 4. Wrap the image in a white rounded-corner card.
//! 5. Optionally wrap that in a black rounded-corner card with the caption
//!    drawn below the symbol.
//!
//! ## Example
//!
//! Generate a captioned badge with a logo:
//!
//! ```no_run
//! use qrbadge::{helper::generate_and_save, RenderOptions};
//! use std::path::Path;
//!
//! let opts = RenderOptions {
//!     corner_radius: 15,
//!     inner_border_size: 15,
//!     outer_border_size: 15,
//!     ..RenderOptions::default()
//! };
//! generate_and_save(
//!     "https://example.com",
//!     Some("example.com"),
//!     Some(Path::new("logo.png")),
//!     None,
//!     &opts,
//!     Path::new("badge.png"),
//! )
//! .unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: QR encoding and rasterization.
//! - [`style`]: logo overlay, frames, and caption drawing.
//! - [`font`]: caption font discovery.
//! - [`helper`]: high-level pipeline entry points.

pub mod error;
pub mod font;
pub mod helper;
pub mod matrix;
pub mod options;
pub mod style;

pub use error::{Error, Result};
pub use matrix::QrMatrix;
pub use options::{EccLevel, RenderOptions};
