//! Rectangular character grid and its column-major transpose.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

/// A rectangular grid of characters, immutable after construction.
///
/// Invariant: every row has length [`Grid::width`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Split `text` on line breaks and right-pad every row with spaces to
    /// the longest row's length.
    ///
    /// A trailing line break yields a trailing (padded) empty row, which is
    /// preserved. Padding already-rectangular text leaves every cell
    /// unchanged.
    #[must_use]
    pub fn pad(text: &str) -> Self {
        let mut rows: Vec<Vec<char>> = text.split('\n').map(|line| line.chars().collect()).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Self { rows, width }
    }

    /// Build the column-major view: row `x` of the result is column `x` of
    /// `self`. Requires rectangularity, which construction guarantees.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let rows: Vec<Vec<char>> = (0..self.width)
            .map(|x| self.rows.iter().map(|row| row[x]).collect())
            .collect();
        Self { rows, width: self.height() }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at column `x` of row `y`.
    #[must_use]
    pub fn at(&self, x: usize, y: usize) -> char {
        self.rows[y][x]
    }

    /// One full row of cells.
    #[must_use]
    pub fn row(&self, y: usize) -> &[char] {
        &self.rows[y]
    }
}
