//! Alphabet: the fixed ordered symbol set shared by every component.
//!
//! Defines the canonical index↔symbol mapping. Each component receives
//! an [`Alphabet`] value at construction; there is no process-wide
//! mutable global.

use crate::error::EnigmaError;

/// Number of symbols in an alphabet.
pub const ALPHABET_LEN: usize = 26;

const LATIN: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Fixed ordered set of 26 unique symbols.
///
/// Immutable once constructed. Every index used by the wiring, rotor,
/// reflector, and plugboard components is an index into this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; ALPHABET_LEN],
}

impl Alphabet {
    /// Creates an alphabet from 26 symbols.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSeries`] if any symbol appears
    /// more than once.
    pub fn new(symbols: [char; ALPHABET_LEN]) -> Result<Self, EnigmaError> {
        for (i, &c) in symbols.iter().enumerate() {
            if symbols[..i].contains(&c) {
                return Err(EnigmaError::InvalidSeries(c));
            }
        }
        Ok(Alphabet { symbols })
    }

    /// The Latin alphabet A through Z, used by every historical wiring.
    pub fn latin() -> Self {
        Alphabet { symbols: LATIN }
    }

    /// Returns the index of `c` in the alphabet.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotInAlphabet`] if `c` is not a
    /// member. Callers must propagate this; no component substitutes a
    /// default for an unknown symbol.
    pub fn index_of(&self, c: char) -> Result<usize, EnigmaError> {
        self.symbols
            .iter()
            .position(|&s| s == c)
            .ok_or(EnigmaError::SymbolNotInAlphabet(c))
    }

    /// Returns the symbol at `index`.
    ///
    /// # Panics
    /// Panics if `index >= 26`. Internal callers always reduce indices
    /// modulo the series length first.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Returns the number of symbols (always 26).
    pub fn len(&self) -> usize {
        ALPHABET_LEN
    }

    /// An alphabet is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if `c` is a member of the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Iterates the symbols in canonical order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}
