use super::position::Position;

/// A coordinate outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position {pos} is outside the {rows}x{cols} board")]
pub struct OutOfBounds {
    pub pos: Position,
    pub rows: usize,
    pub cols: usize,
}

/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols}: both must be positive and the cell count even")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("board needs {pairs} distinct symbols but the alphabet has {available}")]
    AlphabetExhausted { pairs: usize, available: usize },

    #[error("symbol '{symbol}' appears an odd number of times")]
    UnpairedSymbols { symbol: char },

    #[error("layout has {actual} symbols, expected {expected}")]
    LayoutSizeMismatch { expected: usize, actual: usize },
}

/// Errors returned by turn operations.
///
/// Every rejection leaves the engine as it was, except that a rejected
/// second selection hides the first card again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),

    #[error("card at {0} is already matched")]
    CardAlreadyMatched(Position),

    #[error("card at {0} was already selected this turn")]
    DuplicateSelection(Position),

    #[error("game is already complete")]
    GameAlreadyComplete,

    #[error("no first card has been selected")]
    NoFirstSelection,

    #[error("first card already selected at {0}; select the second card")]
    SelectionInProgress(Position),

    #[error("the last mismatch has not been acknowledged")]
    MismatchPending,

    #[error("there is no mismatch to acknowledge")]
    NoPendingMismatch,
}
