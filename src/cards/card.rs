//! Card instances - runtime card state.
//!
//! A `Card` carries a symbol fixed at deal time plus two visibility flags.
//!
//! ## Invariants
//!
//! - `matched` implies `revealed`
//! - once `matched` is set it never clears, and `reveal`/`hide` no longer
//!   touch the card

use serde::{Deserialize, Serialize};

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CardFields")]
pub struct Card {
    symbol: char,
    revealed: bool,
    matched: bool,
}

/// Wire form of a card. A matched card always comes back face up.
#[derive(Deserialize)]
struct CardFields {
    symbol: char,
    #[serde(default)]
    revealed: bool,
    #[serde(default)]
    matched: bool,
}

impl From<CardFields> for Card {
    fn from(fields: CardFields) -> Self {
        Self {
            symbol: fields.symbol,
            revealed: fields.revealed || fields.matched,
            matched: fields.matched,
        }
    }
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// The card's symbol, whether or not it is visible.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// Turn the card face up. No-op on matched cards.
    pub fn reveal(&mut self) {
        if !self.matched {
            self.revealed = true;
        }
    }

    /// Turn the card face down. No-op on matched cards.
    pub fn hide(&mut self) {
        if !self.matched {
            self.revealed = false;
        }
    }

    /// Permanently match the card.
    pub fn set_matched(&mut self) {
        self.matched = true;
        self.revealed = true;
    }
}
