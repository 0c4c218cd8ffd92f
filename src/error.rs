//! Error types for the icon generator

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing an icon
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the preferred font file
    #[error("Failed to read font file {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Font file was read but contained no usable face
    #[error("No usable font face in {path}")]
    FontParse { path: PathBuf },

    /// Selected font has no coverage for the requested glyph
    #[error("Glyph {0:?} is not available in the selected font")]
    MissingGlyph(char),

    /// Built-in glyph table failed to deserialize
    #[error("Built-in glyph table is invalid: {0}")]
    GlyphTable(#[from] serde_json::Error),

    /// Canvas dimensions were rejected
    #[error("Cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    /// Color literal was not of the form #RRGGBB
    #[error("Invalid color literal: {0}")]
    InvalidColor(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True when the error means the preferred font cannot supply the glyph.
    ///
    /// Only these errors are recovered by switching to the built-in fallback
    /// font. Everything else (canvas, encoding, output I/O) propagates.
    pub fn is_font_unavailable(&self) -> bool {
        matches!(
            self,
            Error::FontRead { .. } | Error::FontParse { .. } | Error::MissingGlyph(_)
        )
    }
}
