//! Card system: the card value object and the symbol alphabet.
//!
//! ## Key Types
//!
//! - `Card`: symbol plus revealed/matched flags
//! - `ALPHABET`: the 70 symbols pairs are dealt from
//! - `pair_symbols`: pick the symbols for a board of a given size

pub mod alphabet;
pub mod card;

pub use alphabet::{pair_symbols, ALPHABET};
pub use card::Card;
