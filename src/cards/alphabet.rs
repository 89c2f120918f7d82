//! Symbol pool for dealing pairs.

use tracing::warn;

use crate::core::{BoardError, SymbolOverflow};

/// Symbols in dealing order: uppercase, lowercase, digits, then punctuation.
pub const ALPHABET: [char; 70] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1',
    '2', '3', '4', '5', '6', '7', '8', '9', '!', '@', '#', '$', '%', '^', '&', '*',
];

/// Pick `pair_count` symbols from the front of `ALPHABET`.
///
/// Past the end of the alphabet, `SymbolOverflow::Wrap` cycles back to the
/// start and `SymbolOverflow::Reject` fails.
pub fn pair_symbols(pair_count: usize, overflow: SymbolOverflow) -> Result<Vec<char>, BoardError> {
    if pair_count > ALPHABET.len() {
        match overflow {
            SymbolOverflow::Reject => {
                return Err(BoardError::AlphabetExhausted {
                    pairs: pair_count,
                    available: ALPHABET.len(),
                });
            }
            SymbolOverflow::Wrap => {
                warn!(
                    pairs = pair_count,
                    available = ALPHABET.len(),
                    "board exceeds alphabet, symbols will repeat"
                );
            }
        }
    }

    Ok(ALPHABET.iter().copied().cycle().take(pair_count).collect())
}
