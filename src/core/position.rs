//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A 0-based `(row, col)` coordinate on the board.
///
/// Human-facing front ends usually number rows and columns from 1; use
/// [`Position::from_one_based`] at that boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Translate a 1-based coordinate pair.
    ///
    /// Returns `None` if either component is 0.
    #[must_use]
    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        Some(Self::new(row.checked_sub(1)?, col.checked_sub(1)?))
    }

    /// Row-major index into a grid with `cols` columns.
    #[must_use]
    pub(crate) const fn index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
