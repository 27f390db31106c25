use clap::ValueEnum;
use qrcode::EcLevel;

/// QR error correction level.
///
/// Higher levels tolerate more obscured modules, which matters when a logo
/// covers the center of the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EccLevel {
    Low,
    Medium,
    Quartile,
    High,
}

impl From<EccLevel> for EcLevel {
    fn from(level: EccLevel) -> Self {
        match level {
            EccLevel::Low => EcLevel::L,
            EccLevel::Medium => EcLevel::M,
            EccLevel::Quartile => EcLevel::Q,
            EccLevel::High => EcLevel::H,
        }
    }
}

/// Rendering parameters for the badge pipeline.
///
/// The defaults mirror the behavior of a plain `qrbadge --data ...`
/// invocation: 10 px modules, a 2-module quiet zone, High error correction,
/// and square (radius 0) frames with no extra borders. The CLI applies its
/// own defaults for the decorative parameters on top of these.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Side length of one module, in pixels.
    pub box_size: u32,
    /// Quiet-zone width around the symbol, in modules.
    pub border: u32,
    /// Minimum QR version (1-40). The encoder grows the symbol if the data
    /// does not fit; `None` selects the smallest version automatically.
    pub version: Option<i16>,
    /// Error correction level.
    pub ecc: EccLevel,
    /// Corner radius of both frames, in pixels. 0 means square corners.
    pub corner_radius: u32,
    /// Width of the white card border around the QR image, in pixels.
    pub inner_border_size: u32,
    /// Width of the black card border around the framed image, in pixels.
    /// Only used when a caption is present.
    pub outer_border_size: u32,
    /// Side length the logo is resized to, in pixels.
    pub logo_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            box_size: 10,
            border: 2,
            version: None,
            ecc: EccLevel::High,
            corner_radius: 0,
            inner_border_size: 0,
            outer_border_size: 0,
            logo_size: 48,
        }
    }
}
