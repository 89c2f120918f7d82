//! Randomness source for deck shuffling.
//!
//! ## Key Features
//!
//! - **Injectable**: boards shuffle through the [`DeckShuffler`] trait, never
//!   a process-wide generator
//! - **Deterministic**: same seed produces the same deck order
//! - **Unbiased**: `GameRng` permutes with rand's Fisher–Yates shuffle
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::{DeckShuffler, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec!['A', 'A', 'B', 'B'];
//! rng.permute(&mut deck);
//!
//! // Same seed, same permutation
//! let mut again = vec!['A', 'A', 'B', 'B'];
//! GameRng::new(42).permute(&mut again);
//! assert_eq!(deck, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces a uniformly random permutation of a deck.
///
/// Implementations must be able to reach every ordering of the slice with
/// equal probability. `Unshuffled` is the exception and exists for fixed
/// layouts.
pub trait DeckShuffler {
    /// Permute `deck` in place.
    fn permute<T>(&mut self, deck: &mut [T]);
}

/// Seeded ChaCha8 RNG.
///
/// Uses ChaCha8 for speed while keeping well-distributed output. Production
/// code seeds it from OS entropy via [`GameRng::from_entropy`]; tests pass a
/// fixed seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from a non-deterministic source.
    ///
    /// The drawn seed is kept so a surprising deal can be reproduced.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

impl DeckShuffler for GameRng {
    fn permute<T>(&mut self, deck: &mut [T]) {
        self.shuffle(deck);
    }
}

/// Leaves the deck in assembly order.
///
/// Assembly order is the symbol pool order with each symbol twice, so a 4x4
/// board reads `A A B B / C C D D / E E F F / G G H H`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unshuffled;

impl DeckShuffler for Unshuffled {
    fn permute<T>(&mut self, _deck: &mut [T]) {}
}
