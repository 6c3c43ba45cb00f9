//! Error types for glyphgrid-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics (dimensions,
//! offending row, index) without exposing internal storage details.

use thiserror::Error;

/// glyphgrid core error type
#[derive(Error, Debug)]
pub enum Error {
    /// The canvas is empty or its rows do not share one width
    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),

    /// Invalid canvas dimensions
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Unsupported number of samples per pixel
    #[error("unsupported samples per pixel: {0} (expected 1, 3 or 4)")]
    InvalidSamples(u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A glyph sink rejected a glyph record
    #[error("glyph sink error: {0}")]
    Sink(#[source] std::boxed::Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for glyphgrid core operations
pub type Result<T> = std::result::Result<T, Error>;
