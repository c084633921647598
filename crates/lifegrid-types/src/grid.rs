//! The rectangular boolean cell grid.
//!
//! A [`Grid`] is always rectangular with at least one row and one column.
//! That invariant is checked once, at construction, so every consumer
//! downstream (the engine in particular) can assume it.
//!
//! Cells are stored row-major in a single buffer. On the wire a grid is a
//! JSON array of rows, each row an array of booleans:
//!
//! ```json
//! [[false, true, false], [false, true, false], [false, true, false]]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reasons a grid cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid has no rows.
    #[error("grid has no rows")]
    Empty,

    /// The grid has rows but none of them contain a cell.
    #[error("grid rows have zero width")]
    ZeroWidth,

    /// A row's length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The cell count does not fit in memory.
    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A text pattern contained a character other than `0` or `1`.
    #[error("unexpected character {character:?} on line {line}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The offending character.
        character: char,
    },
}

/// A finite rectangular grid of alive (`true`) and dead (`false`) cells.
///
/// Grids are plain values: [`Clone`] produces an independent deep copy
/// and nothing is shared between copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for zero rows, [`GridError::ZeroWidth`]
    /// for zero columns, and [`GridError::TooLarge`] if the cell count
    /// overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::Empty);
        }
        if cols == 0 {
            return Err(GridError::ZeroWidth);
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Build a grid from nested rows, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] when `rows` is empty,
    /// [`GridError::ZeroWidth`] when every row is empty, and
    /// [`GridError::Ragged`] when row lengths differ.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.len();
        if rows.iter().all(Vec::is_empty) {
            return Err(GridError::ZeroWidth);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found,
            });
        }

        let row_count = rows.len();
        let cells: Vec<bool> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Parse a grid from lines of `0` and `1` characters.
    ///
    /// Leading and trailing whitespace on each line is ignored, as are
    /// blank lines, so patterns can be written as indented raw strings.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Parse`] for any other character, and the
    /// shape errors of [`Grid::from_rows`].
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|character| match character {
                    '1' => Ok(true),
                    '0' => Ok(false),
                    other => Err(GridError::Parse {
                        line: index.saturating_add(1),
                        character: other,
                    }),
                })
                .collect::<Result<Vec<bool>, GridError>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` of this grid.
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether `other` has exactly the same dimensions.
    pub const fn same_shape(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Whether `(row, col)` lies inside the grid.
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if !self.contains(row, col) {
            return None;
        }
        row.checked_mul(self.cols)?.checked_add(col)
    }

    /// State of the cell at `(row, col)`. Positions outside the grid read
    /// as dead.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.offset(row, col)
            .and_then(|i| self.cells.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Set the cell at `(row, col)`. Returns `false`, leaving the grid
    /// untouched, when the position is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.offset(row, col).and_then(|i| self.cells.get_mut(i)) {
            Some(cell) => {
                *cell = alive;
                true
            }
            None => false,
        }
    }

    /// Overwrite every cell with `f(row, col)`, in row-major order.
    ///
    /// Does not allocate.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        for (row, cells) in self.cells.chunks_mut(self.cols).enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        }
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Number of alive cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    /// Renders one line of `0`/`1` characters per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for &alive in row {
                f.write_str(if alive { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}
