//! glyphgrid-recog - Glyph segmentation and symbol assignment
//!
//! Turns a canvas holding rows of glyphs on a uniform background into a
//! grid of letters, one letter per distinct glyph shape:
//!
//! - **Segmentation**: find rows and glyphs by scanning for blank lines,
//!   then trim every glyph to its content
//! - **Identity**: compare glyphs with a crop and anti-aliasing tolerant
//!   distance instead of byte equality
//! - **Letters**: hand out alphabet symbols to new identities in reading
//!   order
//!
//! # Quick Start
//!
//! ```no_run
//! use glyphgrid_core::{Canvas, Pixel};
//! use glyphgrid_recog::{PipelineOptions, tokenize};
//!
//! let canvas = Canvas::new_filled(800, 600, 3, Pixel::WHITE).unwrap();
//! let options = PipelineOptions::default()
//!     .with_background(Pixel::WHITE)
//!     .with_min_row_height(40);
//! let result = tokenize(&canvas, &options).unwrap();
//! println!("{}", result.grid);
//! ```
//!
//! # Modules
//!
//! - [`segment`]: Row and glyph band detection, trimming
//! - [`ident`]: Tolerant glyph identity and distance
//! - [`alphabet`]: Output alphabets and the letter assigner
//! - [`letter_map`]: Registry of identities and letters
//! - [`pipeline`]: End-to-end tokenization

pub mod alphabet;
mod error;
pub mod ident;
pub mod letter_map;
pub mod pipeline;
pub mod segment;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use alphabet::{Alphabet, LetterAssigner};
pub use ident::{GlyphIdentity, MatchOptions};
pub use letter_map::{LetterMap, LetterMapEntry};
pub use pipeline::{PipelineOptions, Tokenization, tokenize, tokenize_with_sink};
pub use segment::{SegmentOptions, find_bands, segment, trim};

// Re-export core for convenience
pub use glyphgrid_core;
