//! Canvas - the decoded raster
//!
//! The `Canvas` is the in-memory pixel grid produced by an image decoder
//! and consumed by segmentation. It is immutable once produced.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major, one [`Pixel`] per sample position
//! - Every row has exactly `width` pixels
//! - `spp` records how many channels the source carried (1, 3 or 4)
//!
//! # Ownership model
//!
//! `Canvas` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `CanvasMut` via [`Canvas::try_into_mut`]
//! or [`Canvas::to_mut`], then convert back with `Into<Canvas>`.

mod access;
mod clip;

use crate::Pixel;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal canvas data
#[derive(Debug, Clone)]
struct CanvasData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel of the source (1 gray, 3 RGB, 4 RGBA)
    spp: u32,
    /// Row-major pixel data, `width * height` entries
    data: Vec<Pixel>,
}

fn check_spp(spp: u32) -> Result<()> {
    match spp {
        1 | 3 | 4 => Ok(()),
        _ => Err(Error::InvalidSamples(spp)),
    }
}

/// Canvas - immutable pixel grid
///
/// # Examples
///
/// ```
/// use glyphgrid_core::{Canvas, Pixel};
///
/// let canvas = Canvas::new_filled(64, 32, 3, Pixel::WHITE).unwrap();
/// assert_eq!(canvas.width(), 64);
/// assert_eq!(canvas.height(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    inner: Arc<CanvasData>,
}

impl Canvas {
    /// Create a canvas with every pixel set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::InvalidSamples`] if `spp` is not 1, 3 or 4.
    pub fn new_filled(width: u32, height: u32, spp: u32, fill: Pixel) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        check_spp(spp)?;
        let data = vec![fill; width as usize * height as usize];
        Ok(Canvas {
            inner: Arc::new(CanvasData {
                width,
                height,
                spp,
                data,
            }),
        })
    }

    /// Build a canvas from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCanvas`] if the data is empty or its length
    /// is not `width * height`.
    pub fn from_pixels(width: u32, height: u32, spp: u32, data: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas(format!(
                "canvas has zero dimension: {}x{}",
                width, height
            )));
        }
        check_spp(spp)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidCanvas(format!(
                "pixel count {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Canvas {
            inner: Arc::new(CanvasData {
                width,
                height,
                spp,
                data,
            }),
        })
    }

    /// Build a canvas from a list of pixel rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCanvas`] if there are no rows, the first row
    /// is empty, or any row's width differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<Pixel>>, spp: u32) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::InvalidCanvas(format!(
                "canvas has zero dimension: {}x{}",
                width, height
            )));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::InvalidCanvas(format!(
                "row {} has width {}, expected {}",
                y,
                row.len(),
                width
            )));
        }
        let data = rows.into_iter().flatten().collect();
        Self::from_pixels(width as u32, height as u32, spp, data)
    }

    /// Get the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the samples per pixel of the source.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[Pixel] {
        &self.inner.data
    }

    /// Get the number of strong references to this canvas.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two canvases hold exactly the same pixels.
    pub fn equals(&self, other: &Canvas) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.data == other.inner.data
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<CanvasMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(CanvasMut { inner: data }),
            Err(arc) => Err(Canvas { inner: arc }),
        }
    }

    /// Get a mutable copy of this canvas.
    ///
    /// Always copies the pixel data.
    pub fn to_mut(&self) -> CanvasMut {
        CanvasMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Replace every pixel that is not exactly `keep` with `replacement`.
    ///
    /// Isolates a single foreground color from anti-aliasing fringes
    /// before segmentation.
    pub fn isolate_color(&self, keep: Pixel, replacement: Pixel) -> Canvas {
        let mut out = self.to_mut();
        for p in out.inner.data.iter_mut() {
            if *p != keep {
                *p = replacement;
            }
        }
        out.into()
    }
}

/// Mutable canvas
///
/// Obtained from [`Canvas::try_into_mut`] or [`Canvas::to_mut`]; converts
/// back into an immutable [`Canvas`] with `Into`.
#[derive(Debug)]
pub struct CanvasMut {
    inner: CanvasData,
}

impl CanvasMut {
    /// Get the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Set the samples per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSamples`] unless `spp` is 1, 3 or 4.
    pub fn set_spp(&mut self, spp: u32) -> Result<()> {
        check_spp(spp)?;
        self.inner.spp = spp;
        Ok(())
    }

    /// Make every pixel opaque and drop the alpha sample.
    ///
    /// A canvas without alpha is left unchanged.
    pub fn remove_alpha(&mut self) {
        if self.inner.spp != 4 {
            return;
        }
        for p in self.inner.data.iter_mut() {
            *p = p.opaque();
        }
        self.inner.spp = 3;
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Pixel] {
        &mut self.inner.data
    }
}

impl From<CanvasMut> for Canvas {
    fn from(canvas: CanvasMut) -> Self {
        Canvas {
            inner: Arc::new(canvas.inner),
        }
    }
}
