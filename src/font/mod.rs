//! Glyph rasterization
//!
//! Two backends produce the same product, a [`GlyphMask`]: the preferred
//! TrueType font rendered through cosmic-text, and a built-in bitmap font
//! used when the preferred font cannot supply the glyph. The compositor
//! never learns which backend ran.

mod builtin;
mod truetype;

use log::warn;

use crate::error::Result;
use crate::IconSpec;

/// Per-pixel coverage for one rasterized glyph, cropped to its ink box.
///
/// `coverage` is row-major, one byte per pixel, 0 for untouched background
/// and 255 for fully inked. Anti-aliased edges fall in between.
#[derive(Debug, Clone)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl GlyphMask {
    /// Coverage value at `(x, y)`. Callers stay within `width`/`height`.
    pub fn at(&self, x: u32, y: u32) -> u8 {
        self.coverage[(y * self.width + x) as usize]
    }
}

/// Rasterize the glyph for `spec`, preferring the configured font.
///
/// Falls back to the built-in bitmap font only when the preferred font is
/// unusable for this glyph (unreadable file, no parsable face, or missing
/// coverage). Any other failure propagates unchanged.
pub fn glyph_mask(spec: &IconSpec) -> Result<GlyphMask> {
    match truetype::glyph_mask(&spec.font_path, spec.font_size, spec.glyph) {
        Ok(mask) => Ok(mask),
        Err(err) if err.is_font_unavailable() => {
            warn!(
                "Preferred font unusable ({}); substituting built-in fallback font",
                err
            );
            builtin::glyph_mask(spec.glyph)
        }
        Err(err) => Err(err),
    }
}

/// Crop a coverage buffer to the tight bounding box of its inked pixels.
///
/// Returns `None` when nothing is inked.
pub(crate) fn crop_to_ink(width: u32, height: u32, coverage: &[u8]) -> Option<GlyphMask> {
    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut inked = false;

    for y in 0..height {
        for x in 0..width {
            if coverage[(y * width + x) as usize] != 0 {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
                inked = true;
            }
        }
    }

    if !inked {
        return None;
    }

    let w = max_x - min_x + 1;
    let h = max_y - min_y + 1;
    let mut cropped = vec![0u8; (w * h) as usize];
    for y in 0..h {
        for x in 0..w {
            cropped[(y * w + x) as usize] =
                coverage[((y + min_y) * width + (x + min_x)) as usize];
        }
    }

    Some(GlyphMask {
        width: w,
        height: h,
        coverage: cropped,
    })
}
