//! Plugboard (_Steckerbrett_): symmetric pairwise substitution at the
//! machine's input/output boundary.
//!
//! A plugboard holds up to 13 disjoint symbol pairs. Paired symbols
//! trade places in both directions; unpaired symbols pass through
//! unchanged. The mapping is an involution by construction, which is
//! why [`inverse_encode`](crate::Encoder::inverse_encode) is the same
//! operation as `encode` — a design invariant, not a coincidence.

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::error::EnigmaError;
use crate::substitution::Encoder;

/// Symmetric pairwise substitution built from disjoint swap pairs.
///
/// Each symbol participates in at most one pair; a symbol can never be
/// paired with itself. The 13-pair ceiling is structural: 26 symbols,
/// two per pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    alphabet: Alphabet,
    // partner[i] is the alphabet index plugged to symbol i, if any
    partner: [Option<usize>; ALPHABET_LEN],
    pairs: usize,
}

impl Plugboard {
    /// Creates an empty plugboard: every symbol maps to itself.
    pub fn new(alphabet: Alphabet) -> Self {
        Plugboard {
            alphabet,
            partner: [None; ALPHABET_LEN],
            pairs: 0,
        }
    }

    /// Plugs symbols `a` and `b` together in both directions.
    ///
    /// # Errors
    /// - [`EnigmaError::SymbolNotInAlphabet`] if either symbol is
    ///   outside the alphabet.
    /// - [`EnigmaError::SelfPairing`] if `a == b`.
    /// - [`EnigmaError::DuplicatePairing`] if either symbol is already
    ///   claimed by another pair; the offending symbol is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Encoder, Plugboard};
    ///
    /// let mut plugboard = Plugboard::new(Alphabet::latin());
    /// plugboard.add_plug('A', 'H').unwrap();
    /// assert_eq!(plugboard.encode('A').unwrap(), 'H');
    /// assert_eq!(plugboard.encode('H').unwrap(), 'A');
    /// assert_eq!(plugboard.encode('B').unwrap(), 'B');
    /// ```
    pub fn add_plug(&mut self, a: char, b: char) -> Result<(), EnigmaError> {
        let ia = self.alphabet.index_of(a)?;
        let ib = self.alphabet.index_of(b)?;
        if ia == ib {
            return Err(EnigmaError::SelfPairing(a));
        }
        if self.partner[ia].is_some() {
            return Err(EnigmaError::DuplicatePairing(a));
        }
        if self.partner[ib].is_some() {
            return Err(EnigmaError::DuplicatePairing(b));
        }
        self.partner[ia] = Some(ib);
        self.partner[ib] = Some(ia);
        self.pairs += 1;
        Ok(())
    }

    /// Returns the number of plugged pairs (0..=13).
    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    /// Returns the partner of `c`, or `None` if `c` is unpaired or
    /// outside the alphabet.
    pub fn partner_of(&self, c: char) -> Option<char> {
        let index = self.alphabet.index_of(c).ok()?;
        self.partner[index].map(|p| self.alphabet.symbol(p))
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new(Alphabet::latin())
    }
}

impl Encoder for Plugboard {
    fn encode(&self, c: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.index_of(c)?;
        Ok(match self.partner[index] {
            Some(p) => self.alphabet.symbol(p),
            None => c,
        })
    }

    // Plugboards are symmetric: if A -> H then H -> A.
    fn inverse_encode(&self, c: char) -> Result<char, EnigmaError> {
        self.encode(c)
    }
}
