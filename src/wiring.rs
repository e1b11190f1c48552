//! Named historical wiring tables.
//!
//! Standard rotor and reflector wirings for the machine families this
//! crate models. Most Enigma machines carried three rotors in place;
//! some variants had additional rotors that could be swapped in. UKW is
//! the reflector (_Umkehrwalze_), ETW the entry plate (_Eintrittswalze_).
//! The ETW was a simple pass-through in the German service machines but
//! performed a real substitution in other variants.

/// Standard rotor (and entry plate) wirings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorWiring {
    // Commercial Enigma
    CommercialI,
    CommercialII,
    CommercialIII,
    // German Railway (Rocket)
    RocketI,
    RocketII,
    RocketIII,
    RocketEtw,
    // Swiss K
    SwissKI,
    SwissKII,
    SwissKIII,
    /// The Swiss-K entry plate shares the Rocket wiring.
    SwissKEtw,
    // German Army/Navy Enigma
    EnigmaI,
    EnigmaII,
    EnigmaIII,
    EnigmaM3IV,
    EnigmaM3V,
    EnigmaM4VI,
    EnigmaM4VII,
    EnigmaM4VIII,
    EnigmaEtw,
    // M4 fourth rotors, used with the thin reflectors
    EnigmaM4Beta,
    EnigmaM4Gamma,
}

impl RotorWiring {
    /// Returns the 26-symbol permutation string for this wiring.
    pub const fn series(self) -> &'static str {
        match self {
            RotorWiring::CommercialI => "DMTWSILRUYQNKFEJCAZBPGXOHV",
            RotorWiring::CommercialII => "HQZGPJTMOBLNCIFDYAWVEUSRKX",
            RotorWiring::CommercialIII => "UQNTLSZFMREHDPXKIBVYGJCWOA",
            RotorWiring::RocketI => "JGDQOXUSCAMIFRVTPNEWKBLZYH",
            RotorWiring::RocketII => "NTZPSFBOKMWRCJDIVLAEYUXHGQ",
            RotorWiring::RocketIII => "JVIUBHTCDYAKEQZPOSGXNRMWFL",
            RotorWiring::RocketEtw | RotorWiring::SwissKEtw => "QWERTZUIOASDFGHJKPYXCVBNML",
            RotorWiring::SwissKI => "PEZUOHXSCVFMTBGLRINQJWAYDK",
            RotorWiring::SwissKII => "ZOUESYDKFWPCIQXHMVBLGNJRAT",
            RotorWiring::SwissKIII => "EHRVXGAOBQUSIMZFLYNWKTPDJC",
            RotorWiring::EnigmaI => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorWiring::EnigmaII => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorWiring::EnigmaIII => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorWiring::EnigmaM3IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorWiring::EnigmaM3V => "VZBRGITYUPSDNHLXAWMJQOFECK",
            RotorWiring::EnigmaM4VI => "JPGVOUMFYQBENHZRDKASXLICTW",
            RotorWiring::EnigmaM4VII => "NZJHGRCXMYSWBOUFAIVLPEKQDT",
            RotorWiring::EnigmaM4VIII => "FKQHTLXOCBJSPDZRAMEWNIUYGV",
            RotorWiring::EnigmaEtw => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            RotorWiring::EnigmaM4Beta => "LEYJVCNIXWPBQMDRTAKZGFUHOS",
            RotorWiring::EnigmaM4Gamma => "FSOKANUERHMBTIYCWLQPZXVGJD",
        }
    }
}

/// Standard reflector wirings. All are involutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorWiring {
    EnigmaA,
    EnigmaB,
    EnigmaC,
    EnigmaM4BThin,
    EnigmaM4CThin,
    RocketUkw,
    SwissKUkw,
}

impl ReflectorWiring {
    /// Returns the 26-symbol permutation string for this wiring.
    pub const fn series(self) -> &'static str {
        match self {
            ReflectorWiring::EnigmaA => "EJMZALYXVBWFCRQUONTSPIKHGD",
            ReflectorWiring::EnigmaB => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorWiring::EnigmaC => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
            ReflectorWiring::EnigmaM4BThin => "ENKQAUYWJICOPBLMDXZVFTHRGS",
            ReflectorWiring::EnigmaM4CThin => "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
            ReflectorWiring::RocketUkw => "QYHOGNECVPUZTFDJAXWMKISRBL",
            ReflectorWiring::SwissKUkw => "IMETCGFRAYSQBZXWLHKDVUPOJN",
        }
    }
}
