//! Preferred-font rasterization through cosmic-text
//!
//! The configured font file is the only font the shaper sees: the database
//! is built from that single file, so a missing glyph is reported instead
//! of being papered over by some other system font.

use std::path::Path;

use cosmic_text::fontdb::Database;
use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache};
use log::debug;

use super::{crop_to_ink, GlyphMask};
use crate::error::{Error, Result};

pub(crate) fn glyph_mask(path: &Path, size: f32, glyph: char) -> Result<GlyphMask> {
    let mut db = Database::new();
    db.load_font_file(path).map_err(|source| Error::FontRead {
        path: path.to_path_buf(),
        source,
    })?;

    // Collections load in face order; the first face is the conventional
    // default when no face is named.
    let family = db
        .faces()
        .next()
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        .ok_or_else(|| Error::FontParse {
            path: path.to_path_buf(),
        })?;
    debug!("Loaded font family {:?} from {}", family, path.display());

    let size = size.max(1.0);
    let mut font_system = FontSystem::new_with_locale_and_db("en-US".to_string(), db);
    let mut cache = SwashCache::new();

    let mut buffer = Buffer::new(&mut font_system, Metrics::new(size, size));
    let mut utf8 = [0u8; 4];
    buffer.set_text(
        &mut font_system,
        glyph.encode_utf8(&mut utf8),
        Attrs::new().family(Family::Name(&family)),
        Shaping::Advanced,
    );
    buffer.shape_until_scroll(&mut font_system, false);

    // Scratch raster generously sized around a single glyph; the ink crop
    // below removes all slack. The pad absorbs negative bearings.
    let pad = size.ceil().max(4.0) as i32;
    let side = (pad * 3) as usize;
    let mut scratch = vec![0u8; side * side];

    buffer.draw(
        &mut font_system,
        &mut cache,
        Color::rgb(0xFF, 0xFF, 0xFF),
        |x, y, w, h, color| {
            let alpha = color.a();
            if alpha == 0 {
                return;
            }
            for dy in 0..h as i32 {
                for dx in 0..w as i32 {
                    let px = x + dx + pad;
                    let py = y + dy + pad;
                    if px < 0 || py < 0 || px as usize >= side || py as usize >= side {
                        continue;
                    }
                    let at = py as usize * side + px as usize;
                    if scratch[at] < alpha {
                        scratch[at] = alpha;
                    }
                }
            }
        },
    );

    crop_to_ink(side as u32, side as u32, &scratch).ok_or(Error::MissingGlyph(glyph))
}
