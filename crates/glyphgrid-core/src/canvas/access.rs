//! Pixel access
//!
//! Bounds-checked and unchecked pixel getters/setters, row and column
//! views, and the background tests used by line scanning.

use super::{Canvas, CanvasMut};
use crate::Pixel;
use crate::error::{Error, Result};

impl Canvas {
    /// Get the pixel at (x, y), or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        self.inner.data[y as usize * self.inner.width as usize + x as usize]
    }

    /// Get one full pixel row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Iterate over all pixel rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.inner.data.chunks_exact(self.inner.width as usize)
    }

    /// Iterate over the pixels of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    pub fn column(&self, x: u32) -> impl Iterator<Item = Pixel> + '_ {
        assert!(x < self.width(), "column {} out of range", x);
        self.inner
            .data
            .iter()
            .skip(x as usize)
            .step_by(self.inner.width as usize)
            .copied()
    }

    /// True iff every pixel in row `y` equals `background`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn is_row_blank(&self, y: u32, background: Pixel) -> bool {
        self.row(y).iter().all(|&p| p == background)
    }

    /// True iff every pixel in column `x` equals `background`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    pub fn is_column_blank(&self, x: u32, background: Pixel) -> bool {
        self.column(x).all(|p| p == background)
    }

    /// True iff the whole canvas is `background`.
    pub fn is_blank(&self, background: Pixel) -> bool {
        self.inner.data.iter().all(|&p| p == background)
    }

    /// Count pixels that differ from `background`.
    pub fn count_foreground(&self, background: Pixel) -> usize {
        self.inner.data.iter().filter(|&&p| p != background).count()
    }
}

impl CanvasMut {
    /// Get the pixel at (x, y), or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.inner.data[y as usize * self.inner.width as usize + x as usize])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: Pixel) {
        let w = self.inner.width as usize;
        self.inner.data[y as usize * w + x as usize] = pixel;
    }

    /// Fill a rectangle with `pixel`, clipped to the canvas.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, pixel: Pixel) {
        let x_end = x.saturating_add(w).min(self.width());
        let y_end = y.saturating_add(h).min(self.height());
        for yy in y..y_end {
            for xx in x..x_end {
                self.set_pixel_unchecked(xx, yy, pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Canvas {
        let mut c = Canvas::new_filled(5, 4, 3, Pixel::WHITE).unwrap().to_mut();
        c.set_pixel(2, 1, Pixel::BLACK).unwrap();
        c.set_pixel(4, 3, Pixel::gray(128)).unwrap();
        c.into()
    }

    #[test]
    fn test_get_pixel_bounds() {
        let c = sample();
        assert_eq!(c.get_pixel(2, 1), Some(Pixel::BLACK));
        assert_eq!(c.get_pixel(5, 0), None);
        assert_eq!(c.get_pixel(0, 4), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut c = sample().to_mut();
        assert!(matches!(
            c.set_pixel(5, 0, Pixel::BLACK),
            Err(Error::IndexOutOfBounds { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_row_and_column_views() {
        let c = sample();
        assert_eq!(c.row(1)[2], Pixel::BLACK);
        let col: Vec<Pixel> = c.column(4).collect();
        assert_eq!(col.len(), 4);
        assert_eq!(col[3], Pixel::gray(128));
        assert_eq!(c.rows().count(), 4);
    }

    #[test]
    fn test_blank_lines() {
        let c = sample();
        assert!(c.is_row_blank(0, Pixel::WHITE));
        assert!(!c.is_row_blank(1, Pixel::WHITE));
        assert!(c.is_column_blank(0, Pixel::WHITE));
        assert!(!c.is_column_blank(2, Pixel::WHITE));
        assert!(!c.is_blank(Pixel::WHITE));
        assert_eq!(c.count_foreground(Pixel::WHITE), 2);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut c = Canvas::new_filled(4, 4, 1, Pixel::WHITE).unwrap().to_mut();
        c.fill_rect(2, 2, 10, 10, Pixel::BLACK);
        let c: Canvas = c.into();
        assert_eq!(c.count_foreground(Pixel::WHITE), 4);
    }
}
