//! The board: a row-major grid of cards.
//!
//! ## Dealing
//!
//! 1. Validate dimensions (`rows*cols` positive and even)
//! 2. Pick `rows*cols/2` symbols from the alphabet
//! 3. Lay out two cards per symbol
//! 4. Permute the deck with the injected `DeckShuffler`
//! 5. Place row-major
//!
//! All coordinate access is bounds checked and returns `OutOfBounds`
//! instead of panicking.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::cards::{pair_symbols, Card};
use crate::core::{BoardError, DeckShuffler, GameConfig, OutOfBounds, Position};

/// A grid of cards with each symbol appearing an even number of times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cards: Vec<Card>,
}

impl Board {
    /// Deal a new board.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if either dimension is 0 or the cell count is odd
    /// - `AlphabetExhausted` if the board needs more symbols than the
    ///   alphabet holds and the config says `SymbolOverflow::Reject`
    #[instrument(skip(shuffler), fields(rows = config.rows, cols = config.cols))]
    pub fn new<S: DeckShuffler>(config: &GameConfig, shuffler: &mut S) -> Result<Self, BoardError> {
        let pairs = config.pair_count()?;
        let symbols = pair_symbols(pairs, config.overflow)?;

        let mut deck: Vec<char> = symbols.iter().flat_map(|&s| [s, s]).collect();
        shuffler.permute(&mut deck);

        debug!(pairs, "dealt board");
        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            cards: deck.into_iter().map(Card::new).collect(),
        })
    }

    /// Build a board from a fixed row-major layout.
    ///
    /// Every symbol must appear an even number of times.
    ///
    /// ```
    /// use memory_match::board::Board;
    ///
    /// let board = Board::from_symbols(2, 2, &['A', 'B', 'B', 'A']).unwrap();
    /// assert_eq!(board.size(), 4);
    /// ```
    pub fn from_symbols(rows: usize, cols: usize, symbols: &[char]) -> Result<Self, BoardError> {
        let expected = GameConfig::new(rows, cols).cell_count()?;
        if symbols.len() != expected {
            return Err(BoardError::LayoutSizeMismatch {
                expected,
                actual: symbols.len(),
            });
        }

        let mut counts: HashMap<char, usize> = HashMap::new();
        for &symbol in symbols {
            *counts.entry(symbol).or_default() += 1;
        }
        // Report the first offender in layout order
        if let Some(&symbol) = symbols.iter().find(|s| counts[*s] % 2 != 0) {
            return Err(BoardError::UnpairedSymbols { symbol });
        }

        Ok(Self {
            rows,
            cols,
            cards: symbols.iter().copied().map(Card::new).collect(),
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Check whether a position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Result<usize, OutOfBounds> {
        if self.contains(pos) {
            Ok(pos.index(self.cols))
        } else {
            Err(OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get the card at a position.
    pub fn at(&self, pos: Position) -> Result<&Card, OutOfBounds> {
        let idx = self.index(pos)?;
        Ok(&self.cards[idx])
    }

    /// Get a mutable reference to the card at a position.
    pub fn at_mut(&mut self, pos: Position) -> Result<&mut Card, OutOfBounds> {
        let idx = self.index(pos)?;
        Ok(&mut self.cards[idx])
    }

    /// Reveal the card at `pos`. Matched cards are unaffected.
    pub fn reveal_at(&mut self, pos: Position) -> Result<(), OutOfBounds> {
        self.at_mut(pos)?.reveal();
        Ok(())
    }

    /// Hide the card at `pos`. Matched cards are unaffected.
    pub fn hide_at(&mut self, pos: Position) -> Result<(), OutOfBounds> {
        self.at_mut(pos)?.hide();
        Ok(())
    }

    /// Permanently match the card at `pos`.
    pub fn match_at(&mut self, pos: Position) -> Result<(), OutOfBounds> {
        self.at_mut(pos)?.set_matched();
        Ok(())
    }

    /// Check whether every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// All cards in row-major order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }
}
