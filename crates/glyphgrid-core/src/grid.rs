//! TokenGrid - the row-major letter grid produced by tokenization

/// Rows of assigned letters in reading order (top-to-bottom,
/// left-to-right).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenGrid {
    rows: Vec<Vec<char>>,
}

impl TokenGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<char>) {
        self.rows.push(row);
    }

    /// All rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// A single row, or `None` if out of range.
    pub fn row(&self, index: usize) -> Option<&[char]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// The letter at (row, column), or `None` if out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the grid has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of letters over all rows.
    pub fn token_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Each row as a `String`.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.iter().collect()).collect()
    }

    /// Consume the grid, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<char>> {
        self.rows
    }
}

impl From<Vec<Vec<char>>> for TokenGrid {
    fn from(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }
}

/// One row per line, letters concatenated.
impl std::fmt::Display for TokenGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_accessors() {
        let mut grid = TokenGrid::new();
        assert!(grid.is_empty());
        grid.push_row(vec!['X', 'Y', 'X']);
        grid.push_row(vec!['Y', 'X']);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.token_count(), 5);
        assert_eq!(grid.get(0, 1), Some('Y'));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.row(1), Some(&['Y', 'X'][..]));
        assert_eq!(grid.to_strings(), vec!["XYX".to_string(), "YX".to_string()]);
    }

    #[test]
    fn test_grid_display() {
        let grid = TokenGrid::from(vec![vec!['A', 'B'], vec![], vec!['C']]);
        assert_eq!(grid.to_string(), "AB\n\nC");
    }
}
