//! Synthetic glyph pages
//!
//! [`Shape`]s are small cell bitmaps written as ASCII art. A
//! [`GlyphPainter`] scales a shape to pixels and can imitate the two
//! kinds of rendering variance real screenshots show: an anti-aliased
//! halo around the strokes, and a cropped right/bottom edge. A
//! [`Layout`] places painted glyphs in rows on a page and records the
//! exact bounding box of every glyph, so segmentation results can be
//! checked against known geometry.

use crate::error::{TestError, TestResult};
use glyphgrid_core::{Band, Canvas, Pixel, Region};

/// A cell bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Shape {
    /// Parse ASCII art: `#` is ink, `.` (or space) is blank.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::InvalidShape`] for empty art, ragged rows or
    /// any other character.
    pub fn from_art(rows: &[&str]) -> TestResult<Self> {
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 {
            return Err(TestError::InvalidShape("empty art".to_string()));
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TestError::InvalidShape(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            for c in row.chars() {
                match c {
                    '#' => cells.push(true),
                    '.' | ' ' => cells.push(false),
                    other => {
                        return Err(TestError::InvalidShape(format!(
                            "unexpected character {:?} in row {}",
                            other, i
                        )));
                    }
                }
            }
        }
        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            cells,
        })
    }

    /// Width in cells
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the cell at `(x, y)` is ink
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.cells[(y * self.width + x) as usize]
    }

    /// Number of ink cells
    pub fn ink_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Built-in shapes, all 7 cells tall.
pub mod shapes {
    use super::Shape;

    fn art(rows: &[&str]) -> Shape {
        // Built-in art is well formed
        Shape::from_art(rows).unwrap_or_else(|e| panic!("bad built-in shape: {}", e))
    }

    /// An `O`-like ring
    pub fn ring() -> Shape {
        art(&[
            ".#####.", //
            "##...##", //
            "#.....#", //
            "#.....#", //
            "#.....#", //
            "##...##", //
            ".#####.",
        ])
    }

    /// The ring plus an interior tail, like `Q`.
    ///
    /// Same bounding box as [`ring`]; the tail cells sit well inside the
    /// ring so they stay apart from it after scaling.
    pub fn ring_with_tail() -> Shape {
        art(&[
            ".#####.", //
            "##...##", //
            "#.....#", //
            "#..#..#", //
            "#..##.#", //
            "##...##", //
            ".#####.",
        ])
    }

    /// An `X`-like cross
    pub fn cross() -> Shape {
        art(&[
            "#.....#", //
            "##...##", //
            ".##.##.", //
            "..###..", //
            ".##.##.", //
            "##...##", //
            "#.....#",
        ])
    }

    /// A serif `I`
    pub fn bar() -> Shape {
        art(&[
            "###", //
            ".#.", //
            ".#.", //
            ".#.", //
            ".#.", //
            ".#.", //
            "###",
        ])
    }

    /// A heavy `T`
    pub fn tee() -> Shape {
        art(&[
            "#######", //
            "#######", //
            "..###..", //
            "..###..", //
            "..###..", //
            "..###..", //
            "..###..",
        ])
    }

    /// `count` distinct shapes: stacks of horizontal strokes of
    /// increasing count, each 5 cells wide.
    pub fn strokes(count: usize) -> Vec<Shape> {
        (1..=count)
            .map(|n| {
                let rows: Vec<String> = (0..2 * n - 1)
                    .map(|i| if i % 2 == 0 { "#####" } else { "....." }.to_string())
                    .collect();
                let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
                art(&refs)
            })
            .collect()
    }
}

/// Renders shapes into glyph canvases.
#[derive(Debug, Clone)]
pub struct GlyphPainter {
    scale: u32,
    foreground: Pixel,
    background: Pixel,
    halo: Option<Pixel>,
    trim_right: u32,
    trim_bottom: u32,
}

impl Default for GlyphPainter {
    fn default() -> Self {
        Self {
            scale: 3,
            foreground: Pixel::BLACK,
            background: Pixel::WHITE,
            halo: None,
            trim_right: 0,
            trim_bottom: 0,
        }
    }
}

impl GlyphPainter {
    /// Pixels per shape cell (default: 3)
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Ink color (default: black)
    pub fn with_foreground(mut self, foreground: Pixel) -> Self {
        self.foreground = foreground;
        self
    }

    /// Background color (default: white)
    pub fn with_background(mut self, background: Pixel) -> Self {
        self.background = background;
        self
    }

    /// Surround every stroke with a one-pixel ring of `color`.
    pub fn with_halo(mut self, color: Pixel) -> Self {
        self.halo = Some(color);
        self
    }

    /// Cut the given number of pixel columns/rows off the right and
    /// bottom edge of the scaled shape.
    pub fn with_trim(mut self, right: u32, bottom: u32) -> Self {
        self.trim_right = right;
        self.trim_bottom = bottom;
        self
    }

    /// The configured background color
    pub fn background(&self) -> Pixel {
        self.background
    }

    fn is_ink(&self, shape: &Shape, w: u32, h: u32, x: u32, y: u32) -> bool {
        x < w && y < h && shape.is_set(x / self.scale, y / self.scale)
    }

    /// Paint a shape onto a fresh RGB canvas.
    ///
    /// The canvas is tight around the ink, or around the halo when one is
    /// configured.
    ///
    /// # Errors
    ///
    /// Fails when trimming removes the whole shape.
    pub fn paint(&self, shape: &Shape) -> TestResult<Canvas> {
        let w = (shape.width() * self.scale).saturating_sub(self.trim_right);
        let h = (shape.height() * self.scale).saturating_sub(self.trim_bottom);
        if w == 0 || h == 0 {
            return Err(TestError::InvalidShape("trimmed away".to_string()));
        }
        let pad = u32::from(self.halo.is_some());

        let mut canvas =
            Canvas::new_filled(w + 2 * pad, h + 2 * pad, 3, self.background)?.to_mut();

        if let Some(halo) = self.halo {
            for y in 0..h {
                for x in 0..w {
                    if self.is_ink(shape, w, h, x, y) {
                        canvas.fill_rect(x, y, 3, 3, halo);
                    }
                }
            }
        }
        for y in 0..h {
            for x in 0..w {
                if self.is_ink(shape, w, h, x, y) {
                    canvas.set_pixel_unchecked(x + pad, y + pad, self.foreground);
                }
            }
        }

        Ok(canvas.into())
    }
}

/// A rendered page and the glyph boxes it contains
#[derive(Debug, Clone)]
pub struct Page {
    /// The page image
    pub canvas: Canvas,
    /// Content bounding box of every glyph, per row, in reading order
    pub glyphs: Vec<Vec<Region>>,
}

impl Page {
    /// Expected row bands: the vertical extent of each non-empty row.
    pub fn row_bands(&self) -> Vec<Band> {
        self.glyphs
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| {
                let top = row.iter().map(|r| r.y).min().unwrap_or(0);
                let bottom = row.iter().map(Region::bottom).max().unwrap_or(0);
                Band::new(top, bottom)
            })
            .collect()
    }

    /// Number of glyphs on the page
    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().map(Vec::len).sum()
    }
}

/// Row layout for glyph canvases
#[derive(Debug, Clone)]
pub struct Layout {
    /// Blank border around the page
    pub margin: u32,
    /// Blank columns between neighbouring glyph canvases
    pub column_gap: u32,
    /// Blank rows between rows
    pub row_gap: u32,
    /// Page background
    pub background: Pixel,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            margin: 4,
            column_gap: 3,
            row_gap: 5,
            background: Pixel::WHITE,
        }
    }
}

impl Layout {
    /// Paint every shape with one painter and lay the result out.
    pub fn render_shapes(&self, painter: &GlyphPainter, rows: &[Vec<Shape>]) -> TestResult<Page> {
        let canvases = rows
            .iter()
            .map(|row| row.iter().map(|s| painter.paint(s)).collect())
            .collect::<TestResult<Vec<Vec<Canvas>>>>()?;
        self.render(&canvases)
    }

    /// Place glyph canvases in rows, bottom-aligned within each row.
    ///
    /// Glyph canvases must use the layout's background color.
    pub fn render(&self, rows: &[Vec<Canvas>]) -> TestResult<Page> {
        let row_heights: Vec<u32> = rows
            .iter()
            .map(|row| row.iter().map(Canvas::height).max().unwrap_or(0))
            .collect();
        let row_widths: Vec<u32> = rows
            .iter()
            .map(|row| {
                let glyphs: u32 = row.iter().map(Canvas::width).sum();
                glyphs + self.column_gap * (row.len() as u32).saturating_sub(1)
            })
            .collect();

        let width = row_widths.iter().copied().max().unwrap_or(0) + 2 * self.margin;
        let height = row_heights.iter().sum::<u32>()
            + self.row_gap * (rows.len() as u32).saturating_sub(1)
            + 2 * self.margin;
        let mut page = Canvas::new_filled(width.max(1), height.max(1), 3, self.background)?.to_mut();

        let mut glyphs = Vec::with_capacity(rows.len());
        let mut top = self.margin;
        for (row, &row_height) in rows.iter().zip(&row_heights) {
            let mut regions = Vec::with_capacity(row.len());
            let mut left = self.margin;
            for glyph in row {
                let oy = top + row_height - glyph.height();
                for y in 0..glyph.height() {
                    for x in 0..glyph.width() {
                        page.set_pixel_unchecked(left + x, oy + y, glyph.get_pixel_unchecked(x, y));
                    }
                }
                if let Some(bounds) = glyph.content_bounds(self.background) {
                    regions.push(bounds.offset(left, oy));
                }
                left += glyph.width() + self.column_gap;
            }
            glyphs.push(regions);
            top += row_height + self.row_gap;
        }

        Ok(Page {
            canvas: page.into(),
            glyphs,
        })
    }
}
