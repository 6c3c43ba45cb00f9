//! Glyph segmentation
//!
//! Splits a canvas into rows of glyphs and each row into individual
//! glyphs by scanning for lines that hold nothing but the background
//! color.
//!
//! # Algorithm Overview
//!
//! 1. **Row pass**: [`find_bands`] over the full pixel rows of the canvas
//!    with `min_row_height` as the minimum span
//! 2. **Column pass**: [`find_bands`] over the pixel columns of each row
//!    band with `min_glyph_width` as the minimum span
//! 3. **Trim**: every row band x column band region is cropped to its
//!    minimal non-background bounding box
//!
//! A band that would close before reaching the minimum span stays open
//! across blank lines. This keeps glyphs with detached parts (`i`, `=`,
//! `:`) in a single text row.

use crate::{RecogError, RecogResult};
use glyphgrid_core::{Band, Canvas, Glyph, Pixel, Region};

/// Options for segmentation
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Background color; a line is blank iff every pixel equals it
    /// (default: white)
    pub background: Pixel,

    /// Minimum row band height in pixels (default: 1)
    ///
    /// A row band shorter than this is not closed by a blank row.
    pub min_row_height: u32,

    /// Minimum glyph band width in pixels (default: 1)
    pub min_glyph_width: u32,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            background: Pixel::WHITE,
            min_row_height: 1,
            min_glyph_width: 1,
        }
    }
}

impl SegmentOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color
    pub fn with_background(mut self, background: Pixel) -> Self {
        self.background = background;
        self
    }

    /// Set the minimum row height
    pub fn with_min_row_height(mut self, height: u32) -> Self {
        self.min_row_height = height;
        self
    }

    /// Set the minimum glyph width
    pub fn with_min_glyph_width(mut self, width: u32) -> Self {
        self.min_glyph_width = width;
        self
    }

    /// Validate options
    pub(crate) fn validate(&self) -> RecogResult<()> {
        if self.min_row_height == 0 {
            return Err(RecogError::InvalidParameter(
                "min_row_height must be positive".to_string(),
            ));
        }
        if self.min_glyph_width == 0 {
            return Err(RecogError::InvalidParameter(
                "min_glyph_width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Find bands of non-blank lines.
///
/// Generic over the kind of line: `lines` yields pixel rows, pixel
/// columns or anything else `is_blank` can classify. Bands are reported
/// as half-open index ranges in scan order.
///
/// A band opens at the first non-blank line. At each later blank line the
/// band's span (`index - start`) is compared with `minimum_span`: a
/// shorter band stays open, otherwise it closes at that blank line. A
/// band still open at the end of the sequence closes there.
///
/// # Examples
///
/// ```
/// use glyphgrid_core::Band;
/// use glyphgrid_recog::segment::find_bands;
///
/// let ink = [false, true, true, false, true, false];
/// let bands = find_bands(ink, |&ink| !ink, 1);
/// assert_eq!(bands, vec![Band::new(1, 3), Band::new(4, 5)]);
///
/// // A 1-line gap inside a band shorter than 3 does not split it
/// let bands = find_bands(ink, |&ink| !ink, 3);
/// assert_eq!(bands, vec![Band::new(1, 5)]);
/// ```
pub fn find_bands<I, F>(lines: I, mut is_blank: F, minimum_span: u32) -> Vec<Band>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    let mut bands = Vec::new();
    let mut start: Option<u32> = None;
    let mut len = 0u32;

    for (idx, line) in lines.into_iter().enumerate() {
        let idx = idx as u32;
        len = idx + 1;
        let blank = is_blank(&line);
        match start {
            None if !blank => start = Some(idx),
            Some(s) if blank && idx - s >= minimum_span => {
                bands.push(Band::new(s, idx));
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        bands.push(Band::new(s, len));
    }
    bands
}

/// Find the row bands of a canvas.
pub fn find_rows(canvas: &Canvas, options: &SegmentOptions) -> Vec<Band> {
    let bg = options.background;
    find_bands(
        0..canvas.height(),
        |&y| canvas.is_row_blank(y, bg),
        options.min_row_height,
    )
}

/// Find the glyph (column) bands within one row band.
///
/// A column is blank when every pixel of it inside `row` is background.
pub fn find_glyphs(canvas: &Canvas, row: Band, options: &SegmentOptions) -> Vec<Band> {
    let bg = options.background;
    find_bands(
        0..canvas.width(),
        |&x| row.range().all(|y| canvas.get_pixel_unchecked(x, y) == bg),
        options.min_glyph_width,
    )
}

/// Crop a canvas to its minimal non-background bounding box.
///
/// Returns the cropped canvas and its region within `canvas`, or `None`
/// when every pixel is background.
pub fn trim(canvas: &Canvas, background: Pixel) -> RecogResult<Option<(Canvas, Region)>> {
    Ok(canvas.trim_to_content(background)?)
}

/// Segment a canvas into trimmed glyphs, grouped by row in reading order.
///
/// # Errors
///
/// Returns [`RecogError::InvalidParameter`] for invalid options and
/// [`RecogError::DegenerateGlyph`] if a band region turns out to hold no
/// foreground pixel.
pub fn segment(canvas: &Canvas, options: &SegmentOptions) -> RecogResult<Vec<Vec<Glyph>>> {
    options.validate()?;

    let rows = find_rows(canvas, options);
    log::debug!(
        "found {} row bands in {}x{} canvas: {:?}",
        rows.len(),
        canvas.width(),
        canvas.height(),
        rows
    );

    let mut result = Vec::with_capacity(rows.len());
    for (r, &row) in rows.iter().enumerate() {
        let columns = find_glyphs(canvas, row, options);
        let mut glyphs = Vec::with_capacity(columns.len());

        for (c, &column) in columns.iter().enumerate() {
            let region = Region::from_bands(column, row);
            let sub = canvas.clip_region(&region)?;
            let (image, inner) =
                trim(&sub, options.background)?.ok_or(RecogError::DegenerateGlyph {
                    row: r,
                    column: c,
                    region,
                })?;
            glyphs.push(Glyph::new(image, inner.offset(region.x, region.y), r, c));
        }

        log::debug!(
            "row {} {}: {} glyphs, sizes {:?}",
            r,
            row,
            glyphs.len(),
            glyphs.iter().map(Glyph::dimensions).collect::<Vec<_>>()
        );
        result.push(glyphs);
    }

    Ok(result)
}
