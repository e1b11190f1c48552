//! Substitution: fixed-permutation cryptor and the [`Encoder`] capability.
//!
//! A [`Substitution`] maps each alphabet symbol to the symbol at the
//! same index in its wiring series. The inverse permutation is
//! precomputed at construction so both directions are O(1) per symbol.
//!
//! [`Rotor`](crate::rotor::Rotor), [`Reflector`](crate::reflector::Reflector),
//! and [`Plugboard`](crate::plugboard::Plugboard) all build on this type
//! by composition rather than inheritance.

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::error::EnigmaError;

/// Bidirectional symbol substitution capability.
///
/// Implemented by every component in the signal path that has a
/// distinct forward and inverse direction. The reflector does not
/// implement it: a reflector is its own inverse and exposes only a
/// forward `encode`.
pub trait Encoder {
    /// Substitutes `c` in the forward direction.
    fn encode(&self, c: char) -> Result<char, EnigmaError>;

    /// Substitutes `c` in the inverse direction, undoing [`encode`](Self::encode).
    fn inverse_encode(&self, c: char) -> Result<char, EnigmaError>;
}

/// Fixed permutation over the alphabet, defined by a wiring series.
///
/// The series is an ordered sequence of 26 symbols: input index `i`
/// maps to `series[i]`. Construction validates that the series is an
/// exact permutation of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    alphabet: Alphabet,
    series: [char; ALPHABET_LEN],
    // inverse[k] is the series position whose symbol has alphabet index k
    inverse: [usize; ALPHABET_LEN],
}

impl Substitution {
    /// Creates a substitution from a wiring series string.
    ///
    /// # Parameters
    /// - `alphabet`: The alphabet the series permutes.
    /// - `series`: Exactly 26 symbols, each a distinct alphabet member.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidSeriesLength`] if the series length
    ///   differs from the alphabet length.
    /// - [`EnigmaError::InvalidSeries`] if the series contains a
    ///   duplicate or a symbol outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Encoder, Substitution};
    ///
    /// let rotor_i = Substitution::new(Alphabet::latin(), "EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(rotor_i.encode('A').unwrap(), 'E');
    /// assert_eq!(rotor_i.inverse_encode('E').unwrap(), 'A');
    /// ```
    pub fn new(alphabet: Alphabet, series: &str) -> Result<Self, EnigmaError> {
        let symbols: Vec<char> = series.chars().collect();
        if symbols.len() != alphabet.len() {
            return Err(EnigmaError::InvalidSeriesLength {
                expected: alphabet.len(),
                actual: symbols.len(),
            });
        }

        let mut wired = ['\0'; ALPHABET_LEN];
        let mut inverse = [usize::MAX; ALPHABET_LEN];
        for (pos, &c) in symbols.iter().enumerate() {
            let index = alphabet
                .index_of(c)
                .map_err(|_| EnigmaError::InvalidSeries(c))?;
            if inverse[index] != usize::MAX {
                return Err(EnigmaError::InvalidSeries(c));
            }
            wired[pos] = c;
            inverse[index] = pos;
        }

        Ok(Substitution {
            alphabet,
            series: wired,
            inverse,
        })
    }

    /// Returns the alphabet this substitution operates over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the series length (equal to the alphabet length).
    ///
    /// All modular arithmetic in the rotor is performed against this
    /// value rather than a global constant.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// A series is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the wired symbol at series position `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= 26`. Internal callers reduce positions modulo
    /// the series length first.
    pub(crate) fn symbol_at(&self, pos: usize) -> char {
        self.series[pos]
    }

    /// Returns the series position holding symbol `c`.
    ///
    /// O(1) via the precomputed inverse table.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotInSeries`] if `c` is not in the
    /// series (equivalently, not in the alphabet, since the series is a
    /// permutation of it).
    pub(crate) fn position_of(&self, c: char) -> Result<usize, EnigmaError> {
        let index = self
            .alphabet
            .index_of(c)
            .map_err(|_| EnigmaError::SymbolNotInSeries(c))?;
        Ok(self.inverse[index])
    }
}

impl Encoder for Substitution {
    fn encode(&self, c: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.index_of(c)?;
        Ok(self.series[index])
    }

    fn inverse_encode(&self, c: char) -> Result<char, EnigmaError> {
        let pos = self.position_of(c)?;
        Ok(self.alphabet.symbol(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

    #[test]
    fn test_encode_matches_series() {
        let sub = Substitution::new(Alphabet::latin(), ROTOR_I).unwrap();
        for (plain, cipher) in ('A'..='Z').zip(ROTOR_I.chars()) {
            assert_eq!(sub.encode(plain).unwrap(), cipher);
        }
    }

    #[test]
    fn test_inverse_encode_round_trip() {
        let sub = Substitution::new(Alphabet::latin(), ROTOR_I).unwrap();
        for c in 'A'..='Z' {
            let encoded = sub.encode(c).unwrap();
            assert_eq!(sub.inverse_encode(encoded).unwrap(), c);
        }
    }

    #[test]
    fn test_rejects_short_series() {
        let result = Substitution::new(Alphabet::latin(), "ABC");
        assert_eq!(
            result,
            Err(EnigmaError::InvalidSeriesLength {
                expected: 26,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_rejects_long_series() {
        let series = "ABCDEFGHIJKLMNOPQRSTUVWXYZA";
        let result = Substitution::new(Alphabet::latin(), series);
        assert_eq!(
            result,
            Err(EnigmaError::InvalidSeriesLength {
                expected: 26,
                actual: 27,
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_symbol() {
        let series = "EKMFLGDQVZNTOWYHXUSPAIBRCE";
        let result = Substitution::new(Alphabet::latin(), series);
        assert_eq!(result, Err(EnigmaError::InvalidSeries('E')));
    }

    #[test]
    fn test_rejects_out_of_alphabet_symbol() {
        let series = "eKMFLGDQVZNTOWYHXUSPAIBRCJ";
        let result = Substitution::new(Alphabet::latin(), series);
        assert_eq!(result, Err(EnigmaError::InvalidSeries('e')));
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let sub = Substitution::new(Alphabet::latin(), ROTOR_I).unwrap();
        assert_eq!(
            sub.encode('?'),
            Err(EnigmaError::SymbolNotInAlphabet('?'))
        );
        assert_eq!(
            sub.inverse_encode('?'),
            Err(EnigmaError::SymbolNotInSeries('?'))
        );
    }

    #[test]
    fn test_identity_series() {
        let sub = Substitution::new(Alphabet::latin(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        for c in 'A'..='Z' {
            assert_eq!(sub.encode(c).unwrap(), c);
            assert_eq!(sub.inverse_encode(c).unwrap(), c);
        }
    }
}
