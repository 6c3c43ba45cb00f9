//! Rectangle clipping and content bounds
//!
//! Extraction of rectangular sub-canvases and the minimal bounding box
//! of non-background content (trimming).

use super::Canvas;
use crate::error::{Error, Result};
use crate::{Pixel, Region};

impl Canvas {
    /// Extract a rectangular sub-region as a new canvas.
    ///
    /// If the rectangle extends beyond the canvas it is clipped to the
    /// valid region. The output keeps the source's samples per pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the requested width or height is 0
    /// - the rectangle origin lies outside the canvas
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphgrid_core::{Canvas, Pixel};
    ///
    /// let canvas = Canvas::new_filled(100, 80, 3, Pixel::WHITE).unwrap();
    /// let clipped = canvas.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!(clipped.width(), 20);   // clipped: 100 - 80
    /// assert_eq!(clipped.height(), 20);  // clipped: 80 - 60
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Canvas> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let src_w = self.width();
        let src_h = self.height();

        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside canvas bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);

        let mut data = Vec::with_capacity(clip_w as usize * clip_h as usize);
        for dy in 0..clip_h {
            let row = self.row(y + dy);
            data.extend_from_slice(&row[x as usize..(x + clip_w) as usize]);
        }

        Canvas::from_pixels(clip_w, clip_h, self.spp(), data)
    }

    /// Extract the sub-canvas covered by `region`.
    ///
    /// # Errors
    ///
    /// See [`Canvas::clip_rectangle`].
    pub fn clip_region(&self, region: &Region) -> Result<Canvas> {
        self.clip_rectangle(region.x, region.y, region.w, region.h)
    }

    /// Minimal bounding box containing every pixel that is not
    /// `background`.
    ///
    /// Rows and columns are bounded independently; the result is their
    /// intersection. Returns `None` if the canvas is entirely background.
    pub fn content_bounds(&self, background: Pixel) -> Option<Region> {
        let h = self.height();
        let w = self.width();

        let top = (0..h).find(|&y| !self.is_row_blank(y, background))?;
        // A non-blank row exists, so the remaining scans always succeed.
        let bottom = (top..h)
            .rev()
            .find(|&y| !self.is_row_blank(y, background))
            .unwrap_or(top);
        let left = (0..w)
            .find(|&x| !self.is_column_blank(x, background))
            .unwrap_or(0);
        let right = (left..w)
            .rev()
            .find(|&x| !self.is_column_blank(x, background))
            .unwrap_or(left);

        Some(Region::new(left, top, right - left + 1, bottom - top + 1))
    }

    /// Crop to the bounding box of non-background content.
    ///
    /// Returns the cropped canvas together with its region in this
    /// canvas's coordinates, or `None` if there is no non-background
    /// pixel. The result is maximal: its first and last rows and columns
    /// each hold at least one non-background pixel.
    pub fn trim_to_content(&self, background: Pixel) -> Result<Option<(Canvas, Region)>> {
        let Some(bounds) = self.content_bounds(background) else {
            return Ok(None);
        };
        if bounds.x == 0 && bounds.y == 0 && bounds.w == self.width() && bounds.h == self.height()
        {
            return Ok(Some((self.clone(), bounds)));
        }
        let trimmed = self.clip_region(&bounds)?;
        Ok(Some((trimmed, bounds)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_with(points: &[(u32, u32)], w: u32, h: u32) -> Canvas {
        let mut c = Canvas::new_filled(w, h, 3, Pixel::WHITE).unwrap().to_mut();
        for &(x, y) in points {
            c.set_pixel(x, y, Pixel::BLACK).unwrap();
        }
        c.into()
    }

    #[test]
    fn test_clip_rectangle_basic() {
        let c = canvas_with(&[(50, 40)], 100, 80);
        let clipped = c.clip_rectangle(40, 30, 20, 20).unwrap();
        assert_eq!(clipped.dimensions(), (20, 20));
        // Original pixel at (50,40) is now at (10,10)
        assert_eq!(clipped.get_pixel(10, 10), Some(Pixel::BLACK));
    }

    #[test]
    fn test_clip_rectangle_errors() {
        let c = canvas_with(&[], 10, 10);
        assert!(c.clip_rectangle(10, 0, 2, 2).is_err());
        assert!(c.clip_rectangle(0, 10, 2, 2).is_err());
        assert!(c.clip_rectangle(0, 0, 0, 2).is_err());
    }

    #[test]
    fn test_content_bounds() {
        let c = canvas_with(&[(3, 2), (6, 5), (4, 7)], 10, 10);
        assert_eq!(c.content_bounds(Pixel::WHITE), Some(Region::new(3, 2, 4, 6)));
    }

    #[test]
    fn test_content_bounds_blank() {
        let c = canvas_with(&[], 5, 5);
        assert_eq!(c.content_bounds(Pixel::WHITE), None);
        assert!(c.trim_to_content(Pixel::WHITE).unwrap().is_none());
    }

    #[test]
    fn test_trim_is_minimal() {
        let c = canvas_with(&[(1, 1), (3, 4)], 6, 6);
        let (trimmed, region) = c.trim_to_content(Pixel::WHITE).unwrap().unwrap();
        assert_eq!(region, Region::new(1, 1, 3, 4));
        assert_eq!(trimmed.dimensions(), (3, 4));
        let (w, h) = trimmed.dimensions();
        assert!(!trimmed.is_row_blank(0, Pixel::WHITE));
        assert!(!trimmed.is_row_blank(h - 1, Pixel::WHITE));
        assert!(!trimmed.is_column_blank(0, Pixel::WHITE));
        assert!(!trimmed.is_column_blank(w - 1, Pixel::WHITE));
    }

    #[test]
    fn test_trim_already_tight_shares_data() {
        let c = canvas_with(&[(0, 0), (1, 1)], 2, 2);
        let (trimmed, _) = c.trim_to_content(Pixel::WHITE).unwrap().unwrap();
        assert_eq!(c.ref_count(), 2);
        assert!(trimmed.equals(&c));
    }
}
