//! Band - a half-open index range along one canvas axis

use std::ops::Range;

/// A contiguous half-open range `[start, end)` of row or column indices.
///
/// Bands produced by one scan are strictly increasing and
/// non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Band {
    /// First index in the band
    pub start: u32,
    /// One past the last index in the band
    pub end: u32,
}

impl Band {
    /// Create a band. `start` must not exceed `end`.
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of lines in the band.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// True if the band has no lines.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The band as an index range.
    #[inline]
    pub fn range(&self) -> Range<u32> {
        self.start..self.end
    }

    /// True if `index` lies inside the band.
    #[inline]
    pub fn contains(&self, index: u32) -> bool {
        self.start <= index && index < self.end
    }
}

impl From<Range<u32>> for Band {
    fn from(r: Range<u32>) -> Self {
        Band::new(r.start, r.end)
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_len_and_contains() {
        let b = Band::new(3, 7);
        assert_eq!(b.len(), 4);
        assert!(!b.is_empty());
        assert!(b.contains(3));
        assert!(b.contains(6));
        assert!(!b.contains(7));
        assert_eq!(b.range(), 3..7);
        assert_eq!(Band::from(5..5).len(), 0);
        assert_eq!(b.to_string(), "[3, 7)");
    }
}
