//! Turn phases, outcomes, and the turn log.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Where the engine is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the first card of a turn.
    AwaitingFirstSelection,
    /// First card is face up, waiting for the second.
    AwaitingSecondSelection { first: Position },
    /// Two different symbols are face up until the player acknowledges them.
    AwaitingAcknowledgement { first: Position, second: Position },
    /// Every card is matched. Terminal.
    GameComplete,
}

/// Result of a completed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Both cards showed this symbol and are now matched.
    Match(char),
    /// The symbols differ. Both cards stay face up until
    /// `acknowledge_mismatch` is called.
    Mismatch,
}

impl TurnOutcome {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, TurnOutcome::Match(_))
    }
}

/// A completed turn, kept for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number; equals the move count after this turn.
    pub turn: u32,
    pub first: Position,
    pub second: Position,
    pub outcome: TurnOutcome,
}
