//! Game configuration types.
//!
//! Front ends configure a game by providing a `GameConfig`:
//! - Board dimensions
//! - What to do when the board needs more symbols than the alphabet holds
//!
//! The default is the classic 4x4 board.

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use crate::cards::ALPHABET;

/// Policy for boards that need more distinct symbols than `ALPHABET` holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolOverflow {
    /// Reuse alphabet characters cyclically.
    ///
    /// Some symbols then appear 4, 6, ... times. Every count stays even, so
    /// the game is still completable.
    #[default]
    Wrap,
    /// Refuse to build the board.
    Reject,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Alphabet overflow policy.
    pub overflow: SymbolOverflow,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            overflow: SymbolOverflow::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `rows` x `cols` board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the alphabet overflow policy.
    #[must_use]
    pub fn with_overflow(mut self, overflow: SymbolOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Total number of cells, if the dimensions describe a playable board.
    pub fn cell_count(&self) -> Result<usize, BoardError> {
        let invalid = BoardError::InvalidDimensions {
            rows: self.rows,
            cols: self.cols,
        };
        if self.rows == 0 || self.cols == 0 {
            return Err(invalid);
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells % 2 == 0 => Ok(cells),
            _ => Err(invalid),
        }
    }

    /// Number of pairs on the board.
    pub fn pair_count(&self) -> Result<usize, BoardError> {
        Ok(self.cell_count()? / 2)
    }

    /// Validate dimensions and the overflow policy.
    pub fn validate(&self) -> Result<(), BoardError> {
        let pairs = self.pair_count()?;
        if self.overflow == SymbolOverflow::Reject && pairs > ALPHABET.len() {
            return Err(BoardError::AlphabetExhausted {
                pairs,
                available: ALPHABET.len(),
            });
        }
        Ok(())
    }
}
