//! Error types for the Enigma library.

use std::fmt;

/// Errors produced by the Enigma library.
///
/// Every variant is a construction-time or per-character validation
/// failure. All are deterministic: the same input and machine state
/// always reproduce the same error, so retrying is never meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnigmaError {
    /// Input symbol is not a member of the machine's alphabet.
    SymbolNotInAlphabet(char),
    /// Symbol could not be located in a component's wiring series.
    SymbolNotInSeries(char),
    /// Wiring series length does not match the alphabet length.
    InvalidSeriesLength { expected: usize, actual: usize },
    /// Wiring series contains a duplicate or out-of-alphabet symbol.
    InvalidSeries(char),
    /// Reflector wiring is not an involution at the given symbol.
    InvalidReflection(char),
    /// Plugboard pair would connect a symbol to itself.
    SelfPairing(char),
    /// Plugboard symbol is already claimed by another pair.
    DuplicatePairing(char),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::SymbolNotInAlphabet(c) => {
                write!(f, "Symbol '{}' is not in the alphabet", c)
            }
            EnigmaError::SymbolNotInSeries(c) => {
                write!(f, "Symbol '{}' is not in the wiring series", c)
            }
            EnigmaError::InvalidSeriesLength { expected, actual } => {
                write!(
                    f,
                    "Wiring series has {} symbols, expected {}",
                    actual, expected
                )
            }
            EnigmaError::InvalidSeries(c) => {
                write!(
                    f,
                    "Wiring series contains a duplicate or unknown symbol '{}'",
                    c
                )
            }
            EnigmaError::InvalidReflection(c) => {
                write!(f, "Reflector wiring is not self-inverse at symbol '{}'", c)
            }
            EnigmaError::SelfPairing(c) => {
                write!(f, "Plugboard cannot pair symbol '{}' with itself", c)
            }
            EnigmaError::DuplicatePairing(c) => {
                write!(f, "Plugboard symbol '{}' is already paired", c)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}
