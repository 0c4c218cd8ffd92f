//! Built-in bitmap fallback font
//!
//! Glyph artwork is embedded at compile time as JSON rows of `#` and `.`
//! cells on a uniform grid, rendered at one fixed magnification. The
//! fallback has no configurable size; it exists so a run can still produce
//! an icon when the preferred font is unusable.

use std::collections::HashMap;

use serde::Deserialize;

use super::{crop_to_ink, GlyphMask};
use crate::error::{Error, Result};

/// Raw glyph artwork, keyed by single-character strings
const FALLBACK_GLYPHS: &str = include_str!("../../resources/fallback_glyphs.json");

/// Fixed magnification applied to the bitmap cells
const SCALE: u32 = 4;

struct FallbackFont {
    cell_width: u32,
    cell_height: u32,
    glyphs: HashMap<char, Vec<String>>,
}

/// Rasterize `glyph` from the embedded bitmap table.
///
/// Lowercase ASCII letters map onto the uppercase artwork. Characters
/// absent from the table are a [`Error::MissingGlyph`]; the fallback is
/// the last resort, so this error is fatal to the caller.
pub(crate) fn glyph_mask(glyph: char) -> Result<GlyphMask> {
    let font = fallback_font()?;
    let rows = font
        .glyphs
        .get(&glyph.to_ascii_uppercase())
        .ok_or(Error::MissingGlyph(glyph))?;

    let width = font.cell_width as usize;
    let mut coverage = vec![0u8; width * font.cell_height as usize];
    for (y, row) in rows.iter().take(font.cell_height as usize).enumerate() {
        for (x, cell) in row.chars().take(width).enumerate() {
            if cell == '#' {
                coverage[y * width + x] = 0xFF;
            }
        }
    }

    let tight = crop_to_ink(font.cell_width, font.cell_height, &coverage)
        .ok_or(Error::MissingGlyph(glyph))?;
    Ok(scale_up(&tight, SCALE))
}

/// Deserialize the embedded artwork. Cells outside the declared grid are
/// ignored.
fn fallback_font() -> Result<FallbackFont> {
    #[derive(Deserialize)]
    struct RawFont {
        cell_width: u32,
        cell_height: u32,
        glyphs: HashMap<String, Vec<String>>,
    }

    let raw: RawFont = serde_json::from_str(FALLBACK_GLYPHS)?;
    let glyphs = raw
        .glyphs
        .into_iter()
        .filter_map(|(key, rows)| {
            // Only single-character keys name glyphs; anything else is ignored.
            let mut chars = key.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some((ch, rows))
        })
        .collect();

    Ok(FallbackFont {
        cell_width: raw.cell_width,
        cell_height: raw.cell_height,
        glyphs,
    })
}

/// Nearest-neighbor magnification; bitmap cells stay hard-edged.
fn scale_up(mask: &GlyphMask, factor: u32) -> GlyphMask {
    let width = mask.width * factor;
    let height = mask.height * factor;
    let mut coverage = vec![0u8; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            coverage[(y * width + x) as usize] = mask.at(x / factor, y / factor);
        }
    }
    GlyphMask {
        width,
        height,
        coverage,
    }
}
