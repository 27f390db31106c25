use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use qrbadge::helper::generate_and_save;
use qrbadge::{EccLevel, RenderOptions};
use tracing_subscriber::EnvFilter;

/// Generate a QR code badge with an optional logo and caption.
#[derive(Parser, Debug)]
#[command(name = "qrbadge")]
struct Cli {
    /// URL or data to encode
    #[arg(long)]
    data: String,

    /// Caption text displayed below the QR code
    #[arg(long)]
    text: Option<String>,

    /// Path to a logo image overlaid on the center of the QR code
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output path for the generated image
    #[arg(long, default_value = "qr.png")]
    output: PathBuf,

    /// Corner radius of the rounded borders, in pixels
    #[arg(long, default_value_t = 15)]
    corner_radius: u32,

    /// Inner border width around the QR code, in pixels
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(0..=1024))]
    inner_border_size: u32,

    /// Outer border width, in pixels; only used together with --text
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(0..=1024))]
    outer_border_size: u32,

    /// Pixel size of one QR module
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=256))]
    box_size: u32,

    /// Quiet-zone width around the symbol, in modules
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=64))]
    border: u32,

    /// Minimum QR version; the symbol grows if the data does not fit
    #[arg(long, value_parser = clap::value_parser!(i16).range(1..=40))]
    version: Option<i16>,

    /// Error correction level
    #[arg(long, value_enum, default_value_t = EccLevel::High)]
    ecc: EccLevel,

    /// Side length the logo is resized to, in pixels
    #[arg(long, default_value_t = 48, value_parser = clap::value_parser!(u32).range(1..=1024))]
    logo_size: u32,

    /// Caption font file; common system fonts are probed when omitted
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print a terminal preview of the encoded symbol
    #[arg(long)]
    preview: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            box_size: self.box_size,
            border: self.border,
            version: self.version,
            ecc: self.ecc,
            corner_radius: self.corner_radius,
            inner_border_size: self.inner_border_size,
            outer_border_size: self.outer_border_size,
            logo_size: self.logo_size,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let opts = cli.render_options();

    let matrix = generate_and_save(
        &cli.data,
        cli.text.as_deref(),
        cli.logo.as_deref(),
        cli.font.as_deref(),
        &opts,
        &cli.output,
    )?;

    if cli.preview {
        print!("{}", matrix.render_console());
    }

    println!("QR code saved to {}", cli.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_flags() {
        let cli = Cli::try_parse_from(["qrbadge", "--data", "hello"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("qr.png"));
        assert_eq!(cli.corner_radius, 15);
        assert_eq!(cli.inner_border_size, 15);
        assert_eq!(cli.outer_border_size, 15);
        assert_eq!(cli.box_size, 10);
        assert_eq!(cli.border, 2);
        assert_eq!(cli.ecc, EccLevel::High);
        assert_eq!(cli.logo_size, 48);
        assert!(cli.text.is_none());
        assert!(cli.logo.is_none());
        assert!(!cli.preview);
    }

    #[test]
    fn data_is_required() {
        assert!(Cli::try_parse_from(["qrbadge"]).is_err());
    }

    #[test]
    fn version_is_range_checked() {
        assert!(Cli::try_parse_from(["qrbadge", "--data", "x", "--version", "41"]).is_err());
        let cli = Cli::try_parse_from(["qrbadge", "--data", "x", "--version", "7"]).unwrap();
        assert_eq!(cli.version, Some(7));
    }

    #[test]
    fn zero_box_size_is_rejected() {
        assert!(Cli::try_parse_from(["qrbadge", "--data", "x", "--box-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["qrbadge", "--data", "x", "--box-size", "257"]).is_err());
        let cli = Cli::try_parse_from(["qrbadge", "--data", "x", "--box-size", "1"]).unwrap();
        assert_eq!(cli.box_size, 1);
    }

    #[test]
    fn border_sizes_are_bounded() {
        assert!(Cli::try_parse_from(["qrbadge", "--data", "x", "--border", "65"]).is_err());
        assert!(
            Cli::try_parse_from(["qrbadge", "--data", "x", "--inner-border-size", "1025"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["qrbadge", "--data", "x", "--outer-border-size", "1025"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["qrbadge", "--data", "x", "--logo-size", "0"]).is_err());
    }
}
