//! # memory-match
//!
//! Engine for the memory-matching (concentration) puzzle: a grid of
//! face-down pairs, two cards turned per turn, matches stay up.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: Drawing the board and reading input belong to the front
//!    end. The engine takes coordinates and returns typed results.
//!
//! 2. **Injected Randomness**: Boards are dealt through a `DeckShuffler`.
//!    Production seeds from entropy, tests pass a seed or `Unshuffled`.
//!
//! 3. **Atomic Rejection**: A rejected selection leaves the game as it was
//!    (a rejected second card only turns the first one back down).
//!
//! ## Example
//!
//! ```
//! use memory_match::{GameConfig, GameEngine, Position, TurnOutcome, Unshuffled};
//!
//! // A A B B / C C D D / ...
//! let mut game = GameEngine::with_config(&GameConfig::default(), &mut Unshuffled).unwrap();
//!
//! game.select_first(Position::new(0, 0)).unwrap();
//! let outcome = game.select_second(Position::new(0, 1)).unwrap();
//! assert_eq!(outcome, TurnOutcome::Match('A'));
//! assert_eq!(game.move_count(), 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: Positions, configuration, errors, RNG
//! - `cards`: Card state and the symbol alphabet
//! - `board`: Dealing and the card grid
//! - `game`: Turn state machine and snapshots

pub mod core;
pub mod cards;
pub mod board;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    BoardError, DeckShuffler, GameConfig, GameRng, OutOfBounds, Position, SymbolOverflow,
    TurnError, Unshuffled,
};

pub use crate::cards::{Card, ALPHABET};

pub use crate::board::Board;

pub use crate::game::{
    CellView, GameEngine, Snapshot, TurnOutcome, TurnPhase, TurnRecord, HIDDEN_GLYPH,
};
