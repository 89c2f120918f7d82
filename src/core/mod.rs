//! Core engine types: positions, configuration, errors, RNG.
//!
//! These are the building blocks shared by the board and the turn engine.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;

pub use config::{GameConfig, SymbolOverflow};
pub use error::{BoardError, OutOfBounds, TurnError};
pub use position::Position;
pub use rng::{DeckShuffler, GameRng, Unshuffled};
