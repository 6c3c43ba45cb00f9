//! glyphgrid-core - Basic data structures for glyph tokenization
//!
//! This crate provides the fundamental data structures shared by the
//! glyphgrid crates:
//!
//! - [`Pixel`] - Packed RGBA sample with exact equality
//! - [`Canvas`] / [`CanvasMut`] - The decoded raster (immutable / mutable)
//! - [`Band`] - Half-open row or column range found by line scanning
//! - [`Region`] - Rectangle in canvas coordinates
//! - [`Glyph`] / [`GlyphSink`] - Segmented glyph and its observation hook
//! - [`TokenGrid`] - Row-major grid of assigned letters

pub mod band;
pub mod canvas;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod pixel;
pub mod region;

pub use band::Band;
pub use canvas::{Canvas, CanvasMut};
pub use error::{Error, Result};
pub use glyph::{Glyph, GlyphSink};
pub use grid::TokenGrid;
pub use pixel::Pixel;
pub use region::Region;
