//! Reflector (_Umkehrwalze_): a substitution constrained to be an
//! involution.
//!
//! The reflector sends the signal back through the rotor stack. Because
//! its permutation is self-inverse, the machine as a whole becomes
//! reciprocal: encoding an encoded character yields the original.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::substitution::{Encoder, Substitution};
use crate::wiring::ReflectorWiring;

/// Fixed self-inverse substitution with no position or ring state.
///
/// Construction validates the involution: applying the wiring twice
/// must return every symbol to itself. Fixed points are not forbidden
/// by the validation, only symmetry is required.
///
/// A reflector exposes only the forward [`encode`](Reflector::encode);
/// it is its own inverse, so no separate inverse operation exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Substitution,
}

impl Reflector {
    /// Creates a reflector from a wiring series string.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidSeriesLength`] / [`EnigmaError::InvalidSeries`]
    ///   if the series is not a permutation of the alphabet.
    /// - [`EnigmaError::InvalidReflection`] if the permutation is not an
    ///   involution, reported at the first offending symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Reflector};
    ///
    /// let ukw = Reflector::new(Alphabet::latin(), "EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
    /// assert_eq!(ukw.encode('A').unwrap(), 'E');
    /// assert_eq!(ukw.encode('E').unwrap(), 'A');
    /// ```
    pub fn new(alphabet: Alphabet, series: &str) -> Result<Self, EnigmaError> {
        let wiring = Substitution::new(alphabet, series)?;
        for offset in 0..wiring.len() {
            let c = wiring.symbol_at(offset);
            let image = wiring.symbol_at(alphabet.index_of(c)?);
            if image != alphabet.symbol(offset) {
                return Err(EnigmaError::InvalidReflection(c));
            }
        }
        Ok(Reflector { wiring })
    }

    /// Creates a reflector from a named historical wiring over the
    /// Latin alphabet.
    pub fn with_wiring(wiring: ReflectorWiring) -> Result<Self, EnigmaError> {
        Self::new(Alphabet::latin(), wiring.series())
    }

    /// Reflects `c` through the wiring.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotInAlphabet`] if `c` is outside
    /// the alphabet.
    pub fn encode(&self, c: char) -> Result<char, EnigmaError> {
        self.wiring.encode(c)
    }

    /// Returns the alphabet this reflector operates over.
    pub fn alphabet(&self) -> &Alphabet {
        self.wiring.alphabet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflector_a_vectors() {
        let ukw = Reflector::with_wiring(ReflectorWiring::EnigmaA).unwrap();
        assert_eq!(ukw.encode('A').unwrap(), 'E');
        assert_eq!(ukw.encode('E').unwrap(), 'A');
    }

    #[test]
    fn test_involution_over_all_symbols() {
        let ukw = Reflector::with_wiring(ReflectorWiring::EnigmaB).unwrap();
        for c in 'A'..='Z' {
            let once = ukw.encode(c).unwrap();
            assert_eq!(ukw.encode(once).unwrap(), c);
        }
    }

    #[test]
    fn test_all_historical_reflectors_validate() {
        for wiring in [
            ReflectorWiring::EnigmaA,
            ReflectorWiring::EnigmaB,
            ReflectorWiring::EnigmaC,
            ReflectorWiring::EnigmaM4BThin,
            ReflectorWiring::EnigmaM4CThin,
            ReflectorWiring::RocketUkw,
            ReflectorWiring::SwissKUkw,
        ] {
            assert!(
                Reflector::with_wiring(wiring).is_ok(),
                "{:?} failed involution validation",
                wiring
            );
        }
    }

    #[test]
    fn test_rejects_non_involution() {
        // Enigma rotor I wiring is a valid permutation but not symmetric.
        let result = Reflector::new(Alphabet::latin(), "EKMFLGDQVZNTOWYHXUSPAIBRCJ");
        assert_eq!(result, Err(EnigmaError::InvalidReflection('E')));
    }

    #[test]
    fn test_identity_is_a_valid_involution() {
        // All fixed points, still self-inverse: permitted by the
        // validation even though no historical reflector did this.
        let result = Reflector::new(Alphabet::latin(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejects_invalid_series() {
        assert!(Reflector::new(Alphabet::latin(), "ABC").is_err());
    }

    #[test]
    fn test_encode_rejects_unknown_symbol() {
        let ukw = Reflector::with_wiring(ReflectorWiring::EnigmaB).unwrap();
        assert_eq!(
            ukw.encode('b'),
            Err(EnigmaError::SymbolNotInAlphabet('b'))
        );
    }
}
