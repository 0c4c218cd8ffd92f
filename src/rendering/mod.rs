//! Rendering pipeline
//!
//! Stages run in a fixed order: glyph rasterization, layout, canvas
//! compositing, PNG encoding. Each stage is a small pure function; the
//! driver here wires them together and reports the content digest.

pub mod canvas;
pub mod layout;
pub mod raster;

use log::debug;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::font;
use crate::IconSpec;

/// A fully rendered icon: dimensions plus encoded PNG bytes
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Run the full pipeline for `spec` and return the encoded icon.
pub fn render(spec: &IconSpec) -> Result<RenderedIcon> {
    let mask = font::glyph_mask(spec)?;
    let at = layout::center_glyph(spec.size, spec.size, mask.width, mask.height);

    let mut frame = canvas::solid(spec.size, spec.size, spec.background)?;
    canvas::blit_mask(&mut frame, &mask, at, spec.glyph_color);

    let png_data = raster::encode_png(&frame)?;
    debug!("Rendered icon sha256 {}", hex::encode(Sha256::digest(&png_data)));

    Ok(RenderedIcon {
        width: spec.size,
        height: spec.size,
        png_data,
    })
}
