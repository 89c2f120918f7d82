//! Game session: the turn state machine and what it reports.
//!
//! ## Key Types
//!
//! - `GameEngine`: owns the board, the move counter, and the turn phase
//! - `TurnPhase`: where the engine is within a turn
//! - `TurnOutcome`: `Match(symbol)` or `Mismatch`
//! - `TurnRecord`: one entry of the turn log
//! - `Snapshot`: masked, render-only board view

pub mod engine;
pub mod snapshot;
pub mod turn;

pub use engine::GameEngine;
pub use snapshot::{CellView, Snapshot, HIDDEN_GLYPH};
pub use turn::{TurnOutcome, TurnPhase, TurnRecord};
