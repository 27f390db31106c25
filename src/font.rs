//! Caption font discovery.

use std::fs;
use std::path::Path;

use ab_glyph::FontVec;
use tracing::debug;

use crate::error::{Error, Result};

/// Probed in order when no explicit font path is given: Verdana, Arial, and
/// Helvetica where macOS and Windows keep them, plus the DejaVu and
/// Liberation faces shipped by most Linux distributions.
const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Verdana.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Verdana.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\verdana.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads the caption font from `path`, or from the first hit in
/// [`FONT_SEARCH_PATHS`] when no path is given.
pub fn load_caption_font(path: Option<&Path>) -> Result<FontVec> {
    if let Some(path) = path {
        return load(path);
    }
    for candidate in FONT_SEARCH_PATHS {
        let candidate = Path::new(candidate);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "using discovered caption font");
            return load(candidate);
        }
    }
    Err(Error::FontNotFound)
}

fn load(path: &Path) -> Result<FontVec> {
    let bytes = fs::read(path)?;
    FontVec::try_from_vec(bytes).map_err(|_| Error::FontLoad {
        path: path.to_path_buf(),
    })
}
