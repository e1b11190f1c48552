//! Machine: composition of plugboard, rotor stack, and reflector, plus
//! the odometer stepping policy.
//!
//! The signal path per character is
//! plugboard → rotors (right to left) → reflector → rotors (left to
//! right, inverse) → plugboard. Rotor positions advance before each
//! character is encoded, so the cipher is polyalphabetic: the same
//! plaintext symbol maps differently at each step.

use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::substitution::Encoder;

/// Assembled rotor cipher machine.
///
/// Rotors are ordered left to right as an operator would see them; the
/// rightmost rotor sits at the entry side and steps on every character.
/// After construction the component set is immutable; the only mutable
/// state is each rotor's position (and the stepping switch).
///
/// The core is single threaded and synchronous. Callers wanting
/// parallel throughput must run one `Machine` per logical stream or
/// serialize access externally; rotor positions are not synchronized.
///
/// # Examples
///
/// ```
/// use enigma::{Machine, Plugboard, Reflector, ReflectorWiring, Rotor, RotorWiring};
///
/// let rotors = vec![
///     Rotor::with_wiring(RotorWiring::EnigmaI).unwrap(),
///     Rotor::with_wiring(RotorWiring::EnigmaII).unwrap(),
///     Rotor::with_wiring(RotorWiring::EnigmaIII).unwrap(),
/// ];
/// let reflector = Reflector::with_wiring(ReflectorWiring::EnigmaB).unwrap();
/// let mut machine = Machine::new(rotors, reflector, Plugboard::default());
///
/// assert_eq!(machine.encode("AAAAA").unwrap(), "BDZGO");
/// ```
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
    stepping_enabled: bool,
}

impl Machine {
    /// Assembles a machine from configured components.
    ///
    /// Rotor positions, ring settings, notches, and plug pairs are set
    /// on the components before assembly. Stepping starts enabled.
    pub fn new(rotors: Vec<Rotor>, reflector: Reflector, plugboard: Plugboard) -> Self {
        Machine {
            rotors,
            reflector,
            plugboard,
            stepping_enabled: true,
        }
    }

    /// Returns whether rotors advance before each character.
    pub fn stepping_enabled(&self) -> bool {
        self.stepping_enabled
    }

    /// Enables or disables stepping.
    ///
    /// With stepping disabled the machine is a pure memoryless
    /// substitution, useful for exercising the static signal path
    /// independent of rotor motion.
    pub fn set_stepping_enabled(&mut self, enabled: bool) {
        self.stepping_enabled = enabled;
    }

    /// Read access to the rotor stack, ordered left to right.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Returns each rotor's current position, ordered left to right.
    pub fn rotor_positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Advances the rotor stack one step, with notch carry.
    ///
    /// The rightmost rotor always advances. Moving leftward, each rotor
    /// advances only when the carry flag is set, and the flag for the
    /// next rotor is recomputed as "this rotor now sits at its notch".
    /// Rotors without a notch never propagate the carry.
    ///
    /// Exposed so presentation layers and tests can drive the stepping
    /// mechanism independent of encoding.
    pub fn advance_rotors(&mut self) {
        let mut should_advance = true;
        for rotor in self.rotors.iter_mut().rev() {
            if should_advance {
                rotor.advance();
            }
            should_advance = rotor.at_notch();
        }
    }

    /// Encodes a single character.
    ///
    /// Steps the rotors first (unless stepping is disabled), then routes
    /// the character through the five-stage signal path.
    ///
    /// # Errors
    /// Any component failure aborts the call immediately and surfaces
    /// the originating error unchanged; the machine never substitutes a
    /// default character or skips input.
    pub fn encode_char(&mut self, c: char) -> Result<char, EnigmaError> {
        if self.stepping_enabled {
            self.advance_rotors();
        }
        let mut output = self.plugboard.encode(c)?;
        for rotor in self.rotors.iter().rev() {
            output = rotor.encode(output)?;
        }
        output = self.reflector.encode(output)?;
        for rotor in &self.rotors {
            output = rotor.inverse_encode(output)?;
        }
        self.plugboard.inverse_encode(output)
    }

    /// Encodes a string, one character at a time.
    ///
    /// Strictly sequential: each character's stepping depends on the
    /// positions left by the previous one.
    ///
    /// # Errors
    /// Fails at the first bad character; no partial output is returned.
    pub fn encode(&mut self, text: &str) -> Result<String, EnigmaError> {
        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            output.push(self.encode_char(c)?);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiring::{ReflectorWiring, RotorWiring};

    fn service_machine() -> Machine {
        let rotors = vec![
            Rotor::with_wiring(RotorWiring::EnigmaI).unwrap(),
            Rotor::with_wiring(RotorWiring::EnigmaII).unwrap(),
            Rotor::with_wiring(RotorWiring::EnigmaIII).unwrap(),
        ];
        let reflector = Reflector::with_wiring(ReflectorWiring::EnigmaB).unwrap();
        Machine::new(rotors, reflector, Plugboard::default())
    }

    #[test]
    fn test_historical_vector_aaaaa() {
        let mut machine = service_machine();
        assert_eq!(machine.encode("AAAAA").unwrap(), "BDZGO");
    }

    #[test]
    fn test_rightmost_rotor_steps_every_character() {
        let mut machine = service_machine();
        machine.encode("AAA").unwrap();
        assert_eq!(machine.rotor_positions(), vec![0, 0, 3]);
    }

    #[test]
    fn test_advance_rotors_without_encoding() {
        let mut machine = service_machine();
        machine.advance_rotors();
        machine.advance_rotors();
        assert_eq!(machine.rotor_positions(), vec![0, 0, 2]);
    }

    #[test]
    fn test_notch_carries_to_next_rotor() {
        let mut machine = service_machine();
        machine.rotors[2].set_notch(Some(3));
        machine.advance_rotors();
        machine.advance_rotors();
        assert_eq!(machine.rotor_positions(), vec![0, 0, 2]);
        // Third step lands the right rotor on its notch, carrying to
        // the middle rotor within the same step.
        machine.advance_rotors();
        assert_eq!(machine.rotor_positions(), vec![0, 1, 3]);
    }

    #[test]
    fn test_rotor_without_notch_never_carries() {
        let mut machine = service_machine();
        for _ in 0..60 {
            machine.advance_rotors();
        }
        assert_eq!(machine.rotor_positions(), vec![0, 0, 60 % 26]);
    }

    #[test]
    fn test_stepping_disabled_is_memoryless() {
        let mut machine = service_machine();
        machine.set_stepping_enabled(false);
        let first = machine.encode_char('A').unwrap();
        let second = machine.encode_char('A').unwrap();
        assert_eq!(first, second);
        assert_eq!(machine.rotor_positions(), vec![0, 0, 0]);
    }

    #[test]
    fn test_stepping_disabled_machine_is_self_inverse() {
        let mut machine = service_machine();
        machine.set_stepping_enabled(false);
        for c in 'A'..='Z' {
            let encoded = machine.encode_char(c).unwrap();
            assert_eq!(machine.encode_char(encoded).unwrap(), c);
        }
    }

    #[test]
    fn test_no_character_encodes_to_itself() {
        // The reflector has no fixed points, so neither does the machine.
        let mut machine = service_machine();
        for c in 'A'..='Z' {
            assert_ne!(machine.encode_char(c).unwrap(), c);
        }
    }

    #[test]
    fn test_plugboard_applied_at_both_ends() {
        let mut plugboard = Plugboard::default();
        plugboard.add_plug('A', 'B').unwrap();
        let rotors = vec![
            Rotor::with_wiring(RotorWiring::EnigmaI).unwrap(),
            Rotor::with_wiring(RotorWiring::EnigmaII).unwrap(),
            Rotor::with_wiring(RotorWiring::EnigmaIII).unwrap(),
        ];
        let reflector = Reflector::with_wiring(ReflectorWiring::EnigmaB).unwrap();
        let mut machine = Machine::new(rotors, reflector, plugboard);
        // 'A' enters as 'B'; the core maps 'B' back to 'A' on the first
        // keypress (reciprocal of the A->B vector), and the exit plug
        // turns that 'A' into 'B' again.
        assert_eq!(machine.encode_char('A').unwrap(), 'B');
    }

    #[test]
    fn test_encode_fails_atomically_on_bad_character() {
        let mut machine = service_machine();
        let result = machine.encode("AB?CD");
        assert_eq!(result, Err(EnigmaError::SymbolNotInAlphabet('?')));
    }

    #[test]
    fn test_error_propagates_unchanged() {
        let mut machine = service_machine();
        assert_eq!(
            machine.encode_char('ä'),
            Err(EnigmaError::SymbolNotInAlphabet('ä'))
        );
    }
}
