//! Tolerant glyph identity
//!
//! Two renderings of one symbol rarely match byte for byte: anti-aliasing
//! adds or drops a pixel at the border, so the trimmed boxes differ by a
//! row or column and the edge pixels change color. A [`GlyphIdentity`]
//! therefore compares binarized ink masks with a rank Hausdorff test:
//!
//! 1. **Binarize**: a pixel is ink when any channel differs from the
//!    background by more than `ink_threshold`
//! 2. **Dilate**: the ink mask is dilated with a square of radius
//!    `dilation_radius`
//! 3. **Size gate**: boxes whose width or height differ by more than
//!    `size_tolerance` never match
//! 4. **Offset search**: for every relative offset within
//!    `size_tolerance`, count A's ink outside B's dilated mask and B's ink
//!    outside A's dilated mask; the offset scores the larger of the two
//!    fractions, and the distance is the best score over all offsets
//!
//! A distance of at most `max_distance` is a match.

use crate::{RecogError, RecogResult};
use glyphgrid_core::{Canvas, Glyph, Pixel};

/// Options for glyph identity matching
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Largest width/height difference (and alignment offset) tolerated,
    /// in pixels (default: 2)
    pub size_tolerance: u32,

    /// Radius of the square dilation applied to ink masks (default: 1)
    pub dilation_radius: u32,

    /// Largest per-channel difference from the background that still
    /// counts as background (default: 0, every other color is ink)
    pub ink_threshold: u8,

    /// Largest distance, in [0, 1], that counts as a match (default: 0.03)
    pub max_distance: f32,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            size_tolerance: 2,
            dilation_radius: 1,
            ink_threshold: 0,
            max_distance: 0.03,
        }
    }
}

impl MatchOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size tolerance
    pub fn with_size_tolerance(mut self, tolerance: u32) -> Self {
        self.size_tolerance = tolerance;
        self
    }

    /// Set the dilation radius
    pub fn with_dilation_radius(mut self, radius: u32) -> Self {
        self.dilation_radius = radius;
        self
    }

    /// Set the ink threshold
    pub fn with_ink_threshold(mut self, threshold: u8) -> Self {
        self.ink_threshold = threshold;
        self
    }

    /// Set the match threshold
    pub fn with_max_distance(mut self, distance: f32) -> Self {
        self.max_distance = distance;
        self
    }

    /// Validate options
    pub(crate) fn validate(&self) -> RecogResult<()> {
        if !(0.0..=1.0).contains(&self.max_distance) {
            return Err(RecogError::InvalidParameter(format!(
                "max_distance must be between 0 and 1, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

/// Binary mask with an origin offset.
///
/// `origin` is the mask coordinate of glyph pixel `(0, 0)`, so a dilated
/// mask can extend past the glyph box on every side.
#[derive(Debug, Clone)]
struct Mask {
    width: u32,
    height: u32,
    origin: u32,
    bits: Vec<bool>,
}

impl Mask {
    fn get(&self, x: i64, y: i64) -> bool {
        let mx = x + self.origin as i64;
        let my = y + self.origin as i64;
        if mx < 0 || my < 0 || mx >= self.width as i64 || my >= self.height as i64 {
            return false;
        }
        self.bits[(my as u32 * self.width + mx as u32) as usize]
    }
}

/// Tolerant fingerprint of a glyph
#[derive(Debug, Clone)]
pub struct GlyphIdentity {
    width: u32,
    height: u32,
    /// Ink pixel coordinates in row-major order
    ink: Vec<(u32, u32)>,
    dilated: Mask,
}

impl GlyphIdentity {
    /// Compute the identity of a glyph.
    pub fn compute(glyph: &Glyph, background: Pixel, options: &MatchOptions) -> Self {
        Self::from_canvas(glyph.image(), background, options)
    }

    /// Compute the identity of a (trimmed) canvas.
    pub fn from_canvas(canvas: &Canvas, background: Pixel, options: &MatchOptions) -> Self {
        let (width, height) = canvas.dimensions();
        let mut ink = Vec::new();
        for (y, row) in canvas.rows().enumerate() {
            for (x, &p) in row.iter().enumerate() {
                if p.max_channel_diff(background) > options.ink_threshold {
                    ink.push((x as u32, y as u32));
                }
            }
        }

        let r = options.dilation_radius;
        let dw = width + 2 * r;
        let dh = height + 2 * r;
        let mut bits = vec![false; dw as usize * dh as usize];
        for &(x, y) in &ink {
            // Ink at glyph (x, y) sits at mask (x + r, y + r); its square
            // neighbourhood is [x, x + 2r] x [y, y + 2r].
            for my in y..=y + 2 * r {
                let row = (my * dw) as usize;
                for mx in x..=x + 2 * r {
                    bits[row + mx as usize] = true;
                }
            }
        }

        Self {
            width,
            height,
            ink,
            dilated: Mask {
                width: dw,
                height: dh,
                origin: r,
                bits,
            },
        }
    }

    /// Glyph width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Glyph height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Glyph `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of ink pixels
    pub fn ink_count(&self) -> usize {
        self.ink.len()
    }

    /// Whether the glyph pixel `(x, y)` is ink.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.ink.binary_search_by(|&(ix, iy)| (iy, ix).cmp(&(y, x))).is_ok()
    }

    /// Count of this glyph's ink pixels that fall outside `other`'s
    /// dilated mask when this glyph is shifted by `(dx, dy)`.
    fn uncovered(&self, other: &GlyphIdentity, dx: i64, dy: i64) -> usize {
        self.ink
            .iter()
            .filter(|&&(x, y)| !other.dilated.get(x as i64 + dx, y as i64 + dy))
            .count()
    }

    /// Distance to another identity, in [0, 1].
    ///
    /// See the module documentation for the definition.
    pub fn distance(&self, other: &GlyphIdentity, options: &MatchOptions) -> f32 {
        let tol = options.size_tolerance;
        if self.width.abs_diff(other.width) > tol || self.height.abs_diff(other.height) > tol {
            return 1.0;
        }
        match (self.ink.is_empty(), other.ink.is_empty()) {
            (true, true) => return 0.0,
            (true, false) | (false, true) => return 1.0,
            _ => {}
        }

        let a_count = self.ink.len() as f32;
        let b_count = other.ink.len() as f32;
        let tol = tol as i64;
        let mut best = 1.0f32;
        for dy in -tol..=tol {
            for dx in -tol..=tol {
                let a_miss = self.uncovered(other, dx, dy) as f32 / a_count;
                if a_miss >= best {
                    continue;
                }
                let b_miss = other.uncovered(self, -dx, -dy) as f32 / b_count;
                let score = a_miss.max(b_miss);
                if score < best {
                    best = score;
                    if best == 0.0 {
                        return 0.0;
                    }
                }
            }
        }
        best
    }

    /// Whether two identities represent the same symbol.
    pub fn matches(&self, other: &GlyphIdentity, options: &MatchOptions) -> bool {
        self.distance(other, options) <= options.max_distance
    }
}

/// Distance between two identities; see [`GlyphIdentity::distance`].
pub fn distance(a: &GlyphIdentity, b: &GlyphIdentity, options: &MatchOptions) -> f32 {
    a.distance(b, options)
}

/// Whether two identities match; see [`GlyphIdentity::matches`].
pub fn matches(a: &GlyphIdentity, b: &GlyphIdentity, options: &MatchOptions) -> bool {
    a.matches(b, options)
}
