//! Rotor: a stateful substitution with rotational and ring offsets.
//!
//! A rotor wraps a fixed wiring [`Substitution`] with two independent
//! modular offsets. `position` is the rotor's rotation relative to the
//! static alphabet frame and changes during stepping; `ring_position`
//! (_Ringstellung_) offsets the wiring relative to the contact ring and
//! is set once at machine setup. The two offsets are never conflated:
//! keeping them separate is what makes the forward and inverse paths
//! exact mirrors of each other.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::substitution::{Encoder, Substitution};
use crate::wiring::RotorWiring;

/// Rotating substitution wheel with position, ring setting, and an
/// optional stepping notch.
///
/// The signal enters on the static alphabet frame, is shifted into the
/// rotated wiring frame, passes through the wiring, and is projected
/// back onto the static frame on exit. `inverse_encode` performs the
/// mirror computation, so `inverse_encode(encode(c)) == c` holds for
/// every symbol at every position and ring setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Substitution,
    position: usize,
    ring_position: usize,
    notch: Option<usize>,
}

impl Rotor {
    /// Creates a rotor from a wiring series string.
    ///
    /// Position and ring position start at 0 with no notch.
    ///
    /// # Errors
    /// Same validation as [`Substitution::new`]:
    /// [`EnigmaError::InvalidSeriesLength`] or
    /// [`EnigmaError::InvalidSeries`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Encoder, Rotor};
    ///
    /// let rotor = Rotor::new(Alphabet::latin(), "EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(rotor.encode('A').unwrap(), 'E');
    /// ```
    pub fn new(alphabet: Alphabet, series: &str) -> Result<Self, EnigmaError> {
        Ok(Rotor {
            wiring: Substitution::new(alphabet, series)?,
            position: 0,
            ring_position: 0,
            notch: None,
        })
    }

    /// Creates a rotor from a named historical wiring over the Latin
    /// alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Rotor, RotorWiring};
    ///
    /// let rotor = Rotor::with_wiring(RotorWiring::EnigmaI).unwrap();
    /// assert_eq!(rotor.position(), 0);
    /// ```
    pub fn with_wiring(wiring: RotorWiring) -> Result<Self, EnigmaError> {
        Self::new(Alphabet::latin(), wiring.series())
    }

    /// Returns the current rotational position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Sets the rotational position, normalized modulo the series length.
    pub fn set_position(&mut self, position: usize) {
        self.position = position % self.wiring.len();
    }

    /// Returns the ring position (_Ringstellung_).
    pub fn ring_position(&self) -> usize {
        self.ring_position
    }

    /// Sets the ring position, normalized modulo the series length.
    ///
    /// Set once at configuration time; changing it mid-session breaks
    /// the machine's round-trip contract.
    pub fn set_ring_position(&mut self, ring_position: usize) {
        self.ring_position = ring_position % self.wiring.len();
    }

    /// Returns the notch position, if this rotor has one.
    pub fn notch(&self) -> Option<usize> {
        self.notch
    }

    /// Sets or clears the notch position, normalized modulo the series
    /// length. A rotor without a notch never steps its neighbor.
    pub fn set_notch(&mut self, notch: Option<usize>) {
        self.notch = notch.map(|n| n % self.wiring.len());
    }

    /// Returns true if the rotor currently sits at its notch position.
    pub fn at_notch(&self) -> bool {
        self.notch == Some(self.position)
    }

    /// Advances the rotor by one position, wrapping at the series length.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Advances the rotor by `count` positions, wrapping at the series
    /// length.
    pub fn advance_by(&mut self, count: usize) {
        let len = self.wiring.len();
        self.position = (self.position + count % len) % len;
    }

    /// Returns the alphabet this rotor operates over.
    pub fn alphabet(&self) -> &Alphabet {
        self.wiring.alphabet()
    }

    // Shifts a static-frame index into the rotated wiring frame.
    fn enter_frame(&self, index: usize) -> usize {
        let len = self.wiring.len();
        (index + self.position + len - self.ring_position) % len
    }

    // Projects a wiring-frame index back onto the static frame.
    fn exit_frame(&self, index: usize) -> usize {
        let len = self.wiring.len();
        (index + self.ring_position + len - self.position) % len
    }
}

impl Encoder for Rotor {
    /// Encodes `c` through the rotated wiring.
    ///
    /// The input index is shifted by `position - ring_position` into
    /// the wiring frame, substituted through the series, and the result
    /// shifted back by the same offset onto the static alphabet frame.
    fn encode(&self, c: char) -> Result<char, EnigmaError> {
        let alphabet = self.wiring.alphabet();
        let entry = self.enter_frame(alphabet.index_of(c)?);
        let wired = self.wiring.symbol_at(entry);
        let exit = self.exit_frame(alphabet.index_of(wired)?);
        Ok(alphabet.symbol(exit))
    }

    /// Decodes `c`, exactly undoing [`encode`](Self::encode) at the
    /// same position and ring setting.
    fn inverse_encode(&self, c: char) -> Result<char, EnigmaError> {
        let alphabet = self.wiring.alphabet();
        let entry = self.enter_frame(alphabet.index_of(c)?);
        let contact = alphabet.symbol(entry);
        let exit = self.exit_frame(self.wiring.position_of(contact)?);
        Ok(alphabet.symbol(exit))
    }
}
