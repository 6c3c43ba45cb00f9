//! glyphgrid - Turn screenshots of glyph grids into grids of letters
//!
//! Given an image of rows of glyphs on a uniform background (an in-game
//! word puzzle, a cipher sheet, a rendered symbol table), glyphgrid finds
//! every glyph, groups glyphs that are the same shape, and names each
//! shape with one letter of an alphabet in order of first appearance.
//! It never tries to recognize *which* letter a glyph is.
//!
//! # Example
//!
//! ```
//! use glyphgrid::{Canvas, Pixel, PipelineOptions, tokenize};
//!
//! let mut canvas = Canvas::new_filled(13, 4, 3, Pixel::WHITE).unwrap().to_mut();
//! canvas.fill_rect(0, 0, 4, 4, Pixel::BLACK);
//! canvas.fill_rect(9, 0, 4, 4, Pixel::BLACK);
//!
//! let result = tokenize(&canvas.into(), &PipelineOptions::default()).unwrap();
//! assert_eq!(result.grid.to_string(), "AA");
//! ```
//!
//! Images on disk go through [`tokenize_file`], which decodes the file,
//! drops any alpha channel and runs the same pipeline.

use std::path::Path;

// Re-export core types (primary data structures used everywhere)
pub use glyphgrid_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphgrid_io as io;
pub use glyphgrid_recog as recog;

pub use glyphgrid_io::{DimensionDump, ImageFormat, read_image, write_image};
pub use glyphgrid_recog::{
    Alphabet, MatchOptions, PipelineOptions, SegmentOptions, Tokenization, tokenize,
    tokenize_with_sink,
};

/// Errors from the one-call entry points
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("image error: {0}")]
    Io(#[from] glyphgrid_io::IoError),

    #[error("tokenization error: {0}")]
    Recog(#[from] glyphgrid_recog::RecogError),
}

/// Result type for the one-call entry points
pub type Result<T> = std::result::Result<T, Error>;

/// Read an image file and convert it into a token grid.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read or decoded, [`Error::Recog`]
/// for anything the pipeline rejects.
pub fn tokenize_file<P: AsRef<Path>>(path: P, options: &PipelineOptions) -> Result<Tokenization> {
    let path = path.as_ref();
    let canvas = read_image(path)?;
    log::debug!(
        "read {} ({}x{}, {} channels)",
        path.display(),
        canvas.width(),
        canvas.height(),
        canvas.spp()
    );
    Ok(tokenize(&canvas, options)?)
}

/// Like [`tokenize_file`], showing every glyph to `sink`.
pub fn tokenize_file_with_sink<P, S>(
    path: P,
    options: &PipelineOptions,
    sink: &mut S,
) -> Result<Tokenization>
where
    P: AsRef<Path>,
    S: GlyphSink + ?Sized,
{
    let canvas = read_image(path)?;
    Ok(tokenize_with_sink(&canvas, options, sink)?)
}
