//! Glyph placement on the canvas

/// Fixed upward nudge applied after vertical centering, in pixels
const CENTER_LIFT: i32 = 5;

/// Top-left draw position for a glyph mask on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

/// Center a mask of the given dimensions on the canvas.
///
/// Odd slack rounds the glyph toward the top-left; vertical centering then
/// applies the fixed lift. Masks larger than the canvas produce negative
/// coordinates, which the compositor clips.
pub fn center_glyph(
    canvas_width: u32,
    canvas_height: u32,
    mask_width: u32,
    mask_height: u32,
) -> Placement {
    let x = (canvas_width as i32 - mask_width as i32) / 2;
    let y = (canvas_height as i32 - mask_height as i32) / 2 - CENTER_LIFT;
    Placement { x, y }
}
