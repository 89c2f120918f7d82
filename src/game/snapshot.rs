//! Render-only view of the board.
//!
//! A `Snapshot` never carries the symbol of a face-down card; those cells
//! show `HIDDEN_GLYPH` instead. Front ends draw from a snapshot rather than
//! reading the board directly.

use serde::Serialize;

use crate::board::Board;
use crate::cards::Card;
use crate::core::Position;

/// Glyph shown for face-down cards.
pub const HIDDEN_GLYPH: char = '*';

/// What a player can see of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CellView {
    /// The symbol if face up, otherwise `HIDDEN_GLYPH`.
    pub glyph: char,
    pub revealed: bool,
    pub matched: bool,
}

impl CellView {
    fn of(card: &Card) -> Self {
        let glyph = if card.is_revealed() {
            card.symbol()
        } else {
            HIDDEN_GLYPH
        };
        Self {
            glyph,
            revealed: card.is_revealed(),
            matched: card.is_matched(),
        }
    }
}

/// Masked copy of the board, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    rows: usize,
    cols: usize,
    cells: Vec<CellView>,
}

impl Snapshot {
    /// Capture the visible state of a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            cells: board.cards().iter().map(CellView::of).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    /// The cell at a position, or `None` off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&CellView> {
        if pos.row < self.rows && pos.col < self.cols {
            self.cells.get(pos.index(self.cols))
        } else {
            None
        }
    }

    /// One row of cells.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[CellView]> {
        self.iter_rows().nth(row)
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellView]> + '_ {
        self.cells.chunks(self.cols)
    }
}
