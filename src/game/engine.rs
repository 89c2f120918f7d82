//! Turn state machine for one game of memory.
//!
//! ## Turn Protocol
//!
//! ```text
//! AwaitingFirstSelection --select_first--> AwaitingSecondSelection
//! AwaitingSecondSelection --select_second--> match:    AwaitingFirstSelection | GameComplete
//!                                            mismatch: AwaitingAcknowledgement
//! AwaitingAcknowledgement --acknowledge_mismatch--> AwaitingFirstSelection
//! ```
//!
//! A rejected second selection (same card twice, or an already matched card)
//! hides the first card and returns to `AwaitingFirstSelection` without
//! counting a move. Any other rejection changes nothing.

use tracing::{debug, info, instrument};

use super::snapshot::Snapshot;
use super::turn::{TurnOutcome, TurnPhase, TurnRecord};
use crate::board::Board;
use crate::core::{BoardError, DeckShuffler, GameConfig, GameRng, Position, TurnError};

/// A single-player game session.
///
/// The turn log keeps one small record per completed turn for the life of
/// the game. The move counter saturates at `u32::MAX`.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    moves: u32,
    phase: TurnPhase,
    history: Vec<TurnRecord>,
}

impl GameEngine {
    /// Start a game on a freshly shuffled `rows` x `cols` board.
    ///
    /// The shuffle is seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is 0 or the cell count
    /// is odd.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let mut rng = GameRng::from_entropy();
        debug!(seed = rng.seed(), "seeded deal");
        Self::with_config(&GameConfig::new(rows, cols), &mut rng)
    }

    /// Start a game with a reproducible deal.
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, BoardError> {
        Self::with_config(&GameConfig::new(rows, cols), &mut GameRng::new(seed))
    }

    /// Start a game from a configuration and an explicit shuffler.
    pub fn with_config<S: DeckShuffler>(config: &GameConfig, shuffler: &mut S) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(config, shuffler)?))
    }

    /// Start a game on an existing board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let phase = if board.all_matched() {
            TurnPhase::GameComplete
        } else {
            TurnPhase::AwaitingFirstSelection
        };
        Self {
            board,
            moves: 0,
            phase,
            history: Vec::new(),
        }
    }

    // === Turn API ===

    /// Turn over the first card of a turn.
    ///
    /// # Errors
    ///
    /// - `GameAlreadyComplete` once every card is matched
    /// - `SelectionInProgress` if a first card is already face up
    /// - `MismatchPending` if the last mismatch was not acknowledged
    /// - `OutOfBounds` for positions off the board
    /// - `CardAlreadyMatched` if the card is already matched
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn select_first(&mut self, pos: Position) -> Result<(), TurnError> {
        match self.phase {
            TurnPhase::GameComplete => Err(TurnError::GameAlreadyComplete),
            TurnPhase::AwaitingSecondSelection { first } => Err(TurnError::SelectionInProgress(first)),
            TurnPhase::AwaitingAcknowledgement { .. } => Err(TurnError::MismatchPending),
            TurnPhase::AwaitingFirstSelection => {
                if self.board.at(pos)?.is_matched() {
                    return Err(TurnError::CardAlreadyMatched(pos));
                }
                self.board.reveal_at(pos)?;
                self.phase = TurnPhase::AwaitingSecondSelection { first: pos };
                Ok(())
            }
        }
    }

    /// Turn over the second card and resolve the turn.
    ///
    /// # Errors
    ///
    /// - `GameAlreadyComplete` once every card is matched
    /// - `NoFirstSelection` if no first card is face up
    /// - `MismatchPending` if the last mismatch was not acknowledged
    /// - `OutOfBounds` for positions off the board; the first card stays up
    /// - `DuplicateSelection` if `pos` is the first card; the turn is abandoned
    /// - `CardAlreadyMatched` if the card is already matched; the turn is abandoned
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn select_second(&mut self, pos: Position) -> Result<TurnOutcome, TurnError> {
        let first = match self.phase {
            TurnPhase::GameComplete => return Err(TurnError::GameAlreadyComplete),
            TurnPhase::AwaitingFirstSelection => return Err(TurnError::NoFirstSelection),
            TurnPhase::AwaitingAcknowledgement { .. } => return Err(TurnError::MismatchPending),
            TurnPhase::AwaitingSecondSelection { first } => first,
        };

        if pos == first {
            self.abandon_turn(first)?;
            return Err(TurnError::DuplicateSelection(pos));
        }
        if self.board.at(pos)?.is_matched() {
            self.abandon_turn(first)?;
            return Err(TurnError::CardAlreadyMatched(pos));
        }

        self.board.reveal_at(pos)?;
        self.moves = self.moves.saturating_add(1);

        let symbol = self.board.at(first)?.symbol();
        let outcome = if symbol == self.board.at(pos)?.symbol() {
            self.board.match_at(first)?;
            self.board.match_at(pos)?;
            TurnOutcome::Match(symbol)
        } else {
            TurnOutcome::Mismatch
        };

        self.history.push(TurnRecord {
            turn: self.moves,
            first,
            second: pos,
            outcome,
        });
        debug!(?outcome, moves = self.moves, "turn resolved");

        self.phase = match outcome {
            TurnOutcome::Match(_) if self.board.all_matched() => {
                info!(moves = self.moves, "all pairs matched");
                TurnPhase::GameComplete
            }
            TurnOutcome::Match(_) => TurnPhase::AwaitingFirstSelection,
            TurnOutcome::Mismatch => TurnPhase::AwaitingAcknowledgement { first, second: pos },
        };

        Ok(outcome)
    }

    /// Turn a mismatched pair face down again.
    ///
    /// # Errors
    ///
    /// `NoPendingMismatch` unless the last turn ended in a mismatch that has
    /// not been acknowledged yet.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn acknowledge_mismatch(&mut self) -> Result<(), TurnError> {
        let TurnPhase::AwaitingAcknowledgement { first, second } = self.phase else {
            return Err(TurnError::NoPendingMismatch);
        };
        self.board.hide_at(first)?;
        self.board.hide_at(second)?;
        debug!(%first, %second, "mismatch hidden");
        self.phase = TurnPhase::AwaitingFirstSelection;
        Ok(())
    }

    fn abandon_turn(&mut self, first: Position) -> Result<(), TurnError> {
        self.board.hide_at(first)?;
        self.phase = TurnPhase::AwaitingFirstSelection;
        Ok(())
    }

    // === Queries ===

    /// Check whether every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == TurnPhase::GameComplete
    }

    /// Number of completed turns.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The face-up first card of an unfinished turn, if any.
    #[must_use]
    pub fn pending_selection(&self) -> Option<Position> {
        match self.phase {
            TurnPhase::AwaitingSecondSelection { first } => Some(first),
            _ => None,
        }
    }

    /// Completed turns in order.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Read-only access to the board.
    ///
    /// The board exposes every symbol; front ends should draw from
    /// [`GameEngine::snapshot`].
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Masked view of the board for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.board)
    }
}
