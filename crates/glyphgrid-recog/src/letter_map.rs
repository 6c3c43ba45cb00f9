//! Registry of glyph identities and their letters
//!
//! The [`LetterMap`] is built incrementally in reading order. The first
//! glyph seen of every symbol becomes that symbol's canonical
//! representative; later glyphs are compared against the representatives
//! in insertion order and take the letter of the first match.

use crate::RecogResult;
use crate::alphabet::{Alphabet, LetterAssigner};
use crate::ident::{GlyphIdentity, MatchOptions};
use glyphgrid_core::{Canvas, Glyph, Pixel};

/// One registered symbol
#[derive(Debug, Clone)]
pub struct LetterMapEntry {
    identity: GlyphIdentity,
    letter: char,
    image: Canvas,
    first_seen: (usize, usize),
}

impl LetterMapEntry {
    /// The canonical identity
    pub fn identity(&self) -> &GlyphIdentity {
        &self.identity
    }

    /// The assigned letter
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Image of the representative glyph
    pub fn image(&self) -> &Canvas {
        &self.image
    }

    /// `(row, column)` of the representative glyph
    pub fn first_seen(&self) -> (usize, usize) {
        self.first_seen
    }
}

/// Ordered registry of (identity, letter) pairs
///
/// No two entries share a letter, and no glyph is registered while it
/// matches an existing entry.
#[derive(Debug, Clone)]
pub struct LetterMap {
    entries: Vec<LetterMapEntry>,
    assigner: LetterAssigner,
    background: Pixel,
    options: MatchOptions,
}

impl LetterMap {
    /// Create an empty map.
    pub fn new(alphabet: Alphabet, background: Pixel, options: MatchOptions) -> Self {
        Self {
            entries: Vec::new(),
            assigner: LetterAssigner::new(alphabet),
            background,
            options,
        }
    }

    /// Create a map and register `glyphs` in order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecogError::AlphabetExhausted`] if the glyphs hold
    /// more distinct symbols than the alphabet.
    pub fn with_glyphs<'a, I>(
        glyphs: I,
        alphabet: Alphabet,
        background: Pixel,
        options: MatchOptions,
    ) -> RecogResult<Self>
    where
        I: IntoIterator<Item = &'a Glyph>,
    {
        let mut map = Self::new(alphabet, background, options);
        for glyph in glyphs {
            map.resolve(glyph)?;
        }
        Ok(map)
    }

    /// Find the letter of a glyph, registering it if it is new.
    ///
    /// Returns the letter and whether a new entry was created.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecogError::AlphabetExhausted`] when the glyph
    /// matches no entry and every letter is taken.
    pub fn resolve(&mut self, glyph: &Glyph) -> RecogResult<(char, bool)> {
        let identity = GlyphIdentity::compute(glyph, self.background, &self.options);

        let mut nearest = 1.0f32;
        for entry in &self.entries {
            let d = identity.distance(&entry.identity, &self.options);
            if d <= self.options.max_distance {
                log::trace!(
                    "glyph r{}c{} {:?} -> {} (distance {:.4})",
                    glyph.row(),
                    glyph.column(),
                    glyph.dimensions(),
                    entry.letter,
                    d
                );
                return Ok((entry.letter, false));
            }
            nearest = nearest.min(d);
        }

        let letter = self.assigner.next()?;
        if nearest <= 2.0 * self.options.max_distance {
            log::warn!(
                "glyph r{}c{} registered as {} but was within {:.4} of an existing symbol",
                glyph.row(),
                glyph.column(),
                letter,
                nearest
            );
        }
        log::debug!(
            "new symbol {} from glyph r{}c{} {:?}, {} ink pixels",
            letter,
            glyph.row(),
            glyph.column(),
            glyph.dimensions(),
            identity.ink_count()
        );
        self.entries.push(LetterMapEntry {
            identity,
            letter,
            image: glyph.image().clone(),
            first_seen: (glyph.row(), glyph.column()),
        });
        Ok((letter, true))
    }

    /// Find the letter of a glyph without registering anything.
    pub fn lookup(&self, glyph: &Glyph) -> Option<char> {
        let identity = GlyphIdentity::compute(glyph, self.background, &self.options);
        self.entries
            .iter()
            .find(|e| identity.matches(&e.identity, &self.options))
            .map(|e| e.letter)
    }

    /// Registered entries in insertion order
    pub fn entries(&self) -> &[LetterMapEntry] {
        &self.entries
    }

    /// Entry holding `letter`
    pub fn entry(&self, letter: char) -> Option<&LetterMapEntry> {
        self.entries.iter().find(|e| e.letter == letter)
    }

    /// Number of registered symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Letters still available
    pub fn remaining(&self) -> usize {
        self.assigner.remaining()
    }

    /// Match options in use
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }
}
