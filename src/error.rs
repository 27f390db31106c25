use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while generating a badge.
#[derive(Debug, Error)]
pub enum Error {
    /// The data could not be encoded as a QR code (e.g. too long for the
    /// requested error correction level).
    #[error("failed to encode QR data: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// An image could not be loaded, composed, or saved.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// No caption font was found at any of the probed locations.
    #[error("no caption font found; pass an explicit path with --font")]
    FontNotFound,

    /// The font file exists but could not be parsed.
    #[error("failed to load font from {path}")]
    FontLoad { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
