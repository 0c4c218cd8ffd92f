//! Notification icon generator
//!
//! Produces the app's notification icon asset: a solid-color square with a
//! single centered glyph, encoded as a PNG. The preferred system font is
//! used when it can supply the glyph; otherwise a built-in bitmap font is
//! substituted and the run still succeeds.
//!
//! # Example
//!
//! ```no_run
//! use noticon::IconSpec;
//!
//! # fn main() -> noticon::Result<()> {
//! let icon = noticon::generate(&IconSpec::default())?;
//! assert_eq!((icon.width, icon.height), (96, 96));
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod color;
pub mod error;
pub mod font;
pub mod rendering;

pub use color::Color;
pub use error::{Error, Result};
pub use font::GlyphMask;
pub use rendering::RenderedIcon;

/// Preferred system font consulted before the built-in fallback
#[cfg(target_os = "macos")]
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

/// Preferred system font consulted before the built-in fallback
#[cfg(target_os = "windows")]
pub const DEFAULT_FONT_PATH: &str = "C:\\Windows\\Fonts\\arial.ttf";

/// Preferred system font consulted before the built-in fallback
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Parameters for one icon render
///
/// The defaults describe the notification icon shipped with the app: a
/// 96x96 square in the brand background color with a centered white "S".
///
/// # Examples
///
/// ```
/// let spec = noticon::IconSpec::default();
/// assert_eq!(spec.size, 96);
/// assert_eq!(spec.glyph, 'S');
/// ```
#[derive(Debug, Clone)]
pub struct IconSpec {
    /// Edge length of the square canvas in pixels
    pub size: u32,
    /// Solid background fill
    pub background: Color,
    /// The single character drawn on the canvas
    pub glyph: char,
    /// Glyph fill color
    pub glyph_color: Color,
    /// Preferred font file; unusable files fall back to the built-in font
    pub font_path: PathBuf,
    /// Pixel size for the preferred font (the fallback font has a fixed size)
    pub font_size: f32,
    /// Where the encoded PNG is written; the directory must already exist
    pub output_path: PathBuf,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            size: 96,
            background: Color::rgb(0x60, 0x96, 0xFD),
            glyph: 'S',
            glyph_color: Color::WHITE,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: 48.0,
            output_path: PathBuf::from("assets/images/notification-icon.png"),
        }
    }
}

/// Render the icon described by `spec` without touching the filesystem.
pub fn generate(spec: &IconSpec) -> Result<RenderedIcon> {
    rendering::render(spec)
}

/// Render the icon and write it to `spec.output_path`.
///
/// The output file is overwritten unconditionally. The target directory is
/// never created; writing into a missing directory fails.
pub fn write_icon(spec: &IconSpec) -> Result<RenderedIcon> {
    let icon = rendering::render(spec)?;
    rendering::raster::write_png(&spec.output_path, &icon.png_data)?;
    Ok(icon)
}
