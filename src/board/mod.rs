//! Board: grid state, dealing, and card mutators.
//!
//! The board exclusively owns its cards. Symbols are fixed at deal time;
//! only the revealed/matched flags change afterwards.

mod grid;

pub use grid::Board;
