//! Enigma rotor cipher machine core.
//!
//! Models an electromechanical rotor cipher machine: a pluggable chain
//! of substitution components that encodes one character at a time,
//! with rotor positions advancing between characters to produce a
//! polyalphabetic cipher.
//!
//! # Architecture
//!
//! ```text
//! Alphabet      (fixed ordered set of 26 symbols — shared index lookup)
//!     ↑ used by every component
//! Substitution  (fixed permutation — encode / inverse-encode, O(1) both ways)
//!     ↑ composed into
//! Rotor         (substitution + position / ring offsets + stepping notch)
//! Reflector     (substitution validated to be an involution)
//! Plugboard     (symmetric pairwise swaps, at most 13 pairs)
//!     ↑ composed into
//! Machine       (plugboard → rotors → reflector → rotors⁻¹ → plugboard,
//!                plus the odometer stepping policy)
//! ```
//!
//! # Examples
//!
//! Encipher a message on the classic service machine:
//!
//! ```
//! use enigma::{Machine, Plugboard, Reflector, ReflectorWiring, Rotor, RotorWiring};
//!
//! let rotors = vec![
//!     Rotor::with_wiring(RotorWiring::EnigmaI).unwrap(),
//!     Rotor::with_wiring(RotorWiring::EnigmaII).unwrap(),
//!     Rotor::with_wiring(RotorWiring::EnigmaIII).unwrap(),
//! ];
//! let reflector = Reflector::with_wiring(ReflectorWiring::EnigmaB).unwrap();
//! let mut machine = Machine::new(rotors, reflector, Plugboard::default());
//!
//! assert_eq!(machine.encode("AAAAA").unwrap(), "BDZGO");
//! ```
//!
//! Decipher by running an identically configured machine over the
//! ciphertext — the machine is reciprocal:
//!
//! ```
//! use enigma::{Machine, Plugboard, Reflector, ReflectorWiring, Rotor, RotorWiring};
//!
//! let build = || {
//!     let rotors = vec![
//!         Rotor::with_wiring(RotorWiring::EnigmaI).unwrap(),
//!         Rotor::with_wiring(RotorWiring::EnigmaII).unwrap(),
//!         Rotor::with_wiring(RotorWiring::EnigmaIII).unwrap(),
//!     ];
//!     let reflector = Reflector::with_wiring(ReflectorWiring::EnigmaB).unwrap();
//!     Machine::new(rotors, reflector, Plugboard::default())
//! };
//!
//! let ciphertext = build().encode("HELLOWORLD").unwrap();
//! assert_eq!(build().encode(&ciphertext).unwrap(), "HELLOWORLD");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod substitution;
mod wiring;

pub use alphabet::{Alphabet, ALPHABET_LEN};
pub use error::EnigmaError;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use substitution::{Encoder, Substitution};
pub use wiring::{ReflectorWiring, RotorWiring};
