//! Glyph - a segmented, trimmed sub-image
//!
//! Glyphs are produced by segmentation and consumed by identity
//! resolution. [`GlyphSink`] is the observation hook through which a
//! caller can look at every glyph (for example to dump them to disk)
//! without affecting the result.

use crate::error::Result;
use crate::{Canvas, Region};

/// A single glyph cut out of a canvas.
///
/// `image` is trimmed so that its first/last row and first/last column
/// each contain a non-background pixel.
#[derive(Debug, Clone)]
pub struct Glyph {
    image: Canvas,
    region: Region,
    row: usize,
    column: usize,
}

impl Glyph {
    /// Create a glyph from its trimmed image, its location in the source
    /// canvas and its reading position.
    pub fn new(image: Canvas, region: Region, row: usize, column: usize) -> Self {
        Self {
            image,
            region,
            row,
            column,
        }
    }

    /// The trimmed glyph image.
    #[inline]
    pub fn image(&self) -> &Canvas {
        &self.image
    }

    /// Bounding box in source canvas coordinates.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Index of the text row this glyph belongs to.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Index of the glyph within its row.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Glyph width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Glyph height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Receiver for glyph debug records.
///
/// Called once per glyph in reading order, before the glyph is
/// resolved. Sinks observe only; they cannot change the token grid.
/// An error from a sink aborts the run.
pub trait GlyphSink {
    /// Accept one glyph.
    fn accept(&mut self, glyph: &Glyph) -> Result<()>;
}

impl<F> GlyphSink for F
where
    F: FnMut(&Glyph) -> Result<()>,
{
    fn accept(&mut self, glyph: &Glyph) -> Result<()> {
        self(glyph)
    }
}
