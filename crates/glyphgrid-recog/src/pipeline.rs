//! Canvas to token grid
//!
//! One deterministic pass: segment the canvas, then resolve every glyph
//! in reading order against a [`LetterMap`] and collect the letters into
//! a [`TokenGrid`]. Registered symbols are never revisited or merged.

use crate::RecogResult;
use crate::alphabet::Alphabet;
use crate::ident::MatchOptions;
use crate::letter_map::LetterMap;
use crate::segment::{SegmentOptions, segment};
use glyphgrid_core::{Canvas, Glyph, GlyphSink, Pixel, TokenGrid};

/// Options for a tokenization run
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Segmentation options, including the background color
    pub segment: SegmentOptions,

    /// Glyph identity matching options
    pub matching: MatchOptions,

    /// Output symbols in assignment order (default: `A`-`Z`)
    pub alphabet: Alphabet,

    /// Exact glyph color, if known (default: none)
    ///
    /// When set, every pixel of any other color is replaced by the
    /// background before segmentation, which removes anti-aliasing
    /// fringes entirely.
    pub foreground: Option<Pixel>,
}

impl PipelineOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color
    pub fn with_background(mut self, background: Pixel) -> Self {
        self.segment.background = background;
        self
    }

    /// Set the minimum row height
    pub fn with_min_row_height(mut self, height: u32) -> Self {
        self.segment.min_row_height = height;
        self
    }

    /// Set the minimum glyph width
    pub fn with_min_glyph_width(mut self, width: u32) -> Self {
        self.segment.min_glyph_width = width;
        self
    }

    /// Set the identity match threshold
    pub fn with_max_distance(mut self, distance: f32) -> Self {
        self.matching.max_distance = distance;
        self
    }

    /// Replace the matching options
    pub fn with_matching(mut self, matching: MatchOptions) -> Self {
        self.matching = matching;
        self
    }

    /// Set the output alphabet
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Isolate the given glyph color before segmenting
    pub fn with_foreground(mut self, foreground: Pixel) -> Self {
        self.foreground = Some(foreground);
        self
    }

    /// The background color
    pub fn background(&self) -> Pixel {
        self.segment.background
    }

    /// Validate options
    fn validate(&self) -> RecogResult<()> {
        self.segment.validate()?;
        self.matching.validate()?;
        self.alphabet.validate()?;
        if self.foreground == Some(self.segment.background) {
            return Err(crate::RecogError::InvalidParameter(
                "foreground must differ from background".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of a tokenization run
#[derive(Debug, Clone)]
pub struct Tokenization {
    /// Letters in reading order, one row per text row
    pub grid: TokenGrid,
    /// The symbols registered during the run
    pub letter_map: LetterMap,
}

impl Tokenization {
    /// Number of distinct symbols found
    pub fn distinct(&self) -> usize {
        self.letter_map.len()
    }
}

/// A sink that ignores every glyph
struct NoSink;

impl GlyphSink for NoSink {
    fn accept(&mut self, _glyph: &Glyph) -> glyphgrid_core::Result<()> {
        Ok(())
    }
}

/// Convert a canvas into a token grid.
///
/// # Errors
///
/// - [`crate::RecogError::InvalidParameter`] for invalid options
/// - [`crate::RecogError::DegenerateGlyph`] if segmentation produced an
///   empty region
/// - [`crate::RecogError::AlphabetExhausted`] when the canvas holds more
///   distinct glyphs than the alphabet has symbols
///
/// # Examples
///
/// ```
/// use glyphgrid_core::{Canvas, Pixel};
/// use glyphgrid_recog::{PipelineOptions, tokenize};
///
/// let mut canvas = Canvas::new_filled(13, 4, 3, Pixel::WHITE).unwrap().to_mut();
/// canvas.fill_rect(0, 0, 4, 4, Pixel::BLACK);
/// canvas.fill_rect(6, 0, 1, 4, Pixel::BLACK);
/// canvas.fill_rect(9, 0, 4, 4, Pixel::BLACK);
///
/// let result = tokenize(&canvas.into(), &PipelineOptions::default()).unwrap();
/// assert_eq!(result.grid.to_string(), "ABA");
/// ```
pub fn tokenize(canvas: &Canvas, options: &PipelineOptions) -> RecogResult<Tokenization> {
    tokenize_with_sink(canvas, options, &mut NoSink)
}

/// Convert a canvas into a token grid, showing every glyph to `sink`.
///
/// The sink sees each glyph once, in reading order, before it is
/// resolved. It cannot change the result, but its errors abort the run.
pub fn tokenize_with_sink<S: GlyphSink + ?Sized>(
    canvas: &Canvas,
    options: &PipelineOptions,
    sink: &mut S,
) -> RecogResult<Tokenization> {
    options.validate()?;
    let background = options.background();

    let isolated;
    let source = match options.foreground {
        Some(foreground) => {
            isolated = canvas.isolate_color(foreground, background);
            &isolated
        }
        None => canvas,
    };

    let rows = segment(source, &options.segment)?;

    let mut letter_map = LetterMap::new(
        options.alphabet.clone(),
        background,
        options.matching.clone(),
    );
    let mut grid = TokenGrid::new();
    for row in &rows {
        let mut letters = Vec::with_capacity(row.len());
        for glyph in row {
            sink.accept(glyph)?;
            let (letter, _) = letter_map.resolve(glyph)?;
            letters.push(letter);
        }
        grid.push_row(letters);
    }

    log::info!(
        "tokenized {}x{} canvas: {} rows, {} glyphs, {} distinct symbols",
        canvas.width(),
        canvas.height(),
        grid.len(),
        grid.token_count(),
        letter_map.len()
    );

    Ok(Tokenization { grid, letter_map })
}
