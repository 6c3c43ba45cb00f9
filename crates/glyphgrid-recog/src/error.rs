//! Error types for glyphgrid-recog

use glyphgrid_core::Region;
use thiserror::Error;

/// Errors that can occur during segmentation and identity resolution
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error (invalid canvas, sink failure, ...)
    #[error("core error: {0}")]
    Core(#[from] glyphgrid_core::Error),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A row band x column band region held no foreground pixel
    #[error("degenerate glyph at row {row}, column {column}: region {region} is all background")]
    DegenerateGlyph {
        row: usize,
        column: usize,
        region: Region,
    },

    /// More distinct glyphs than alphabet symbols
    #[error(
        "alphabet exhausted: {distinct} distinct glyphs seen, alphabet has {alphabet_size} symbols"
    )]
    AlphabetExhausted { distinct: usize, alphabet_size: usize },
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
