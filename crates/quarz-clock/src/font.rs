//! System font discovery.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Paths probed in order for a usable sans-serif face.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Reads the first candidate font found on this host.
///
/// The clock cannot draw numerals or the readout without a font, so absence
/// is fatal at startup rather than degraded at runtime.
pub fn load_system_font_bytes() -> Result<Vec<u8>> {
    for path in FONT_CANDIDATES {
        if Path::new(path).is_file() {
            log::debug!("loading font {path}");
            return std::fs::read(path).with_context(|| format!("failed to read font {path}"));
        }
    }
    bail!("no usable system font found (probed {} known locations)", FONT_CANDIDATES.len())
}
