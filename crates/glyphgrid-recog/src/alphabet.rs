//! Output alphabets and letter assignment

use crate::{RecogError, RecogResult};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

const UPPER_CASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_CASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// A fixed, ordered set of output symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// `A`-`Z`
    pub fn upper_case() -> Self {
        Self::from_chars(UPPER_CASE.chars())
    }

    /// `a`-`z`
    pub fn lower_case() -> Self {
        Self::from_chars(LOWER_CASE.chars())
    }

    /// `0`-`9`
    pub fn digits() -> Self {
        Self::from_chars(DIGITS.chars())
    }

    /// `A`-`Z` followed by `a`-`z`
    pub fn upper_and_lower() -> Self {
        Self::from_chars(UPPER_CASE.chars().chain(LOWER_CASE.chars()))
    }

    /// Build an alphabet from symbols in assignment order.
    ///
    /// Symbols are kept as given; see [`Alphabet::first_duplicate`].
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            symbols: chars.into_iter().collect(),
        }
    }

    /// The symbols in assignment order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if there are no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol at `index`
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The first symbol that occurs more than once, if any
    pub fn first_duplicate(&self) -> Option<char> {
        let mut seen = HashSet::with_capacity(self.symbols.len());
        self.symbols.iter().copied().find(|&c| !seen.insert(c))
    }

    pub(crate) fn validate(&self) -> RecogResult<()> {
        if self.is_empty() {
            return Err(RecogError::InvalidParameter(
                "alphabet must not be empty".to_string(),
            ));
        }
        if let Some(c) = self.first_duplicate() {
            return Err(RecogError::InvalidParameter(format!(
                "alphabet symbol {:?} occurs more than once",
                c
            )));
        }
        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::upper_case()
    }
}

impl FromStr for Alphabet {
    type Err = RecogError;

    /// Every character of the string is one symbol.
    fn from_str(s: &str) -> RecogResult<Self> {
        let alphabet = Self::from_chars(s.chars());
        alphabet.validate()?;
        Ok(alphabet)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Hands out alphabet symbols in order
#[derive(Debug, Clone)]
pub struct LetterAssigner {
    alphabet: Alphabet,
    cursor: usize,
}

impl LetterAssigner {
    /// Start at the first symbol of `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            cursor: 0,
        }
    }

    /// Take the next unused symbol.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::AlphabetExhausted`] once every symbol has
    /// been handed out. `distinct` counts the requesting glyph.
    pub fn next(&mut self) -> RecogResult<char> {
        let letter = self
            .alphabet
            .get(self.cursor)
            .ok_or(RecogError::AlphabetExhausted {
                distinct: self.cursor + 1,
                alphabet_size: self.alphabet.len(),
            })?;
        self.cursor += 1;
        Ok(letter)
    }

    /// Number of symbols still available
    pub fn remaining(&self) -> usize {
        self.alphabet.len() - self.cursor
    }

    /// Symbols handed out so far, in order
    pub fn assigned(&self) -> &[char] {
        &self.alphabet.symbols()[..self.cursor]
    }

    /// The underlying alphabet
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}
