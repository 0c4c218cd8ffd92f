//! Canvas allocation and glyph compositing

use image::{Rgba, RgbaImage};

use super::layout::Placement;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::font::GlyphMask;

/// Allocate a canvas filled with a solid color, alpha included.
pub fn solid(width: u32, height: u32, color: Color) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(Error::Canvas { width, height });
    }
    Ok(RgbaImage::from_pixel(width, height, Rgba(color.channels())))
}

/// Alpha-blend a coverage mask onto the canvas in the given fill color.
///
/// Mask pixels falling outside the canvas are clipped. Blending an opaque
/// canvas keeps it opaque; anti-aliased mask edges mix fill and background.
pub fn blit_mask(canvas: &mut RgbaImage, mask: &GlyphMask, at: Placement, fill: Color) {
    let (cw, ch) = (canvas.width() as i32, canvas.height() as i32);
    let [fr, fg, fb, fa] = fill.channels();

    for my in 0..mask.height {
        for mx in 0..mask.width {
            let alpha = mask.at(mx, my) as u32;
            if alpha == 0 {
                continue;
            }
            let x = at.x + mx as i32;
            let y = at.y + my as i32;
            if x < 0 || y < 0 || x >= cw || y >= ch {
                continue;
            }

            let px = canvas.get_pixel_mut(x as u32, y as u32);
            px.0 = [
                blend(fr, px.0[0], alpha),
                blend(fg, px.0[1], alpha),
                blend(fb, px.0[2], alpha),
                blend(fa, px.0[3], alpha),
            ];
        }
    }
}

/// Source-over blend of one channel, rounded to nearest.
fn blend(src: u8, dst: u8, alpha: u32) -> u8 {
    ((src as u32 * alpha + dst as u32 * (255 - alpha) + 127) / 255) as u8
}
