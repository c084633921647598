//! Canonical grid encodings used as cycle-detection keys.
//!
//! A signature writes each cell as `0` or `1` and separates rows with
//! `;`, so `[[false, true], [true, false]]` becomes `01;10`. Two grids
//! have equal signatures exactly when they have the same shape and the
//! same cells. The separator is what keeps `["11", "0"]`-style and
//! `["1", "10"]`-style layouts apart.

use std::fmt;

use lifegrid_types::Grid;

/// Row separator inside a signature.
pub const ROW_SEPARATOR: char = ';';

/// Exact, hashable encoding of a grid's full cell pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// Encode `grid`.
    pub fn of(grid: &Grid) -> Self {
        let capacity = grid.rows().saturating_mul(grid.cols().saturating_add(1));
        let mut encoded = String::with_capacity(capacity);
        for (index, row) in grid.iter_rows().enumerate() {
            if index > 0 {
                encoded.push(ROW_SEPARATOR);
            }
            encoded.extend(row.iter().map(|&alive| if alive { '1' } else { '0' }));
        }
        Self(encoded)
    }

    /// The encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Grid> for Signature {
    fn from(grid: &Grid) -> Self {
        Self::of(grid)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
