//! Catalogue of historical rotor and reflector wirings.
//!
//! Rotors I-V were issued with the Enigma I; VI-VIII were added for the
//! naval M3 and carry two turnover notches each.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Historical cipher rotors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorModel {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl RotorModel {
    /// Every rotor in catalogue order.
    pub const ALL: [RotorModel; 8] = [
        RotorModel::I,
        RotorModel::II,
        RotorModel::III,
        RotorModel::IV,
        RotorModel::V,
        RotorModel::VI,
        RotorModel::VII,
        RotorModel::VIII,
    ];

    /// Roman numeral name.
    pub fn name(self) -> &'static str {
        match self {
            RotorModel::I => "I",
            RotorModel::II => "II",
            RotorModel::III => "III",
            RotorModel::IV => "IV",
            RotorModel::V => "V",
            RotorModel::VI => "VI",
            RotorModel::VII => "VII",
            RotorModel::VIII => "VIII",
        }
    }

    pub fn wiring(self) -> &'static str {
        match self {
            RotorModel::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorModel::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorModel::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorModel::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorModel::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
            RotorModel::VI => "JPGVOUMFYQBENHZRDKASXLICTW",
            RotorModel::VII => "NZJHGRCXMYSWBOUFAIVLPEKQDT",
            RotorModel::VIII => "FKQHTLXOCBJSPDZRAMEWNIUYGV",
        }
    }

    /// Turnover letters.
    pub fn notches(self) -> &'static str {
        match self {
            RotorModel::I => "Q",
            RotorModel::II => "E",
            RotorModel::III => "V",
            RotorModel::IV => "J",
            RotorModel::V => "Z",
            RotorModel::VI | RotorModel::VII | RotorModel::VIII => "ZM",
        }
    }

    /// Builds a fresh wheel at position `A`, ring `A`.
    ///
    /// # Errors
    /// Only fails if the catalogue wiring itself is malformed.
    pub fn build(self) -> Result<Rotor, ConfigurationError> {
        Rotor::new(self.name(), self.wiring(), self.notches())
    }
}

impl fmt::Display for RotorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorModel {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        RotorModel::ALL
            .into_iter()
            .find(|model| model.name() == wanted)
            .ok_or_else(|| ConfigurationError::UnknownRotor(s.to_string()))
    }
}

/// Historical reflectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorModel {
    A,
    B,
    C,
}

impl ReflectorModel {
    /// Every reflector in catalogue order.
    pub const ALL: [ReflectorModel; 3] = [ReflectorModel::A, ReflectorModel::B, ReflectorModel::C];

    pub fn name(self) -> &'static str {
        match self {
            ReflectorModel::A => "A",
            ReflectorModel::B => "B",
            ReflectorModel::C => "C",
        }
    }

    pub fn wiring(self) -> &'static str {
        match self {
            ReflectorModel::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            ReflectorModel::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorModel::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }

    /// Builds the reflector.
    ///
    /// # Errors
    /// Only fails if the catalogue wiring itself is malformed.
    pub fn build(self) -> Result<Reflector, ConfigurationError> {
        Reflector::new(self.name(), self.wiring())
    }
}

impl fmt::Display for ReflectorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectorModel {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        ReflectorModel::ALL
            .into_iter()
            .find(|model| model.name() == wanted)
            .ok_or_else(|| ConfigurationError::UnknownReflector(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::Permutation;

    #[test]
    fn test_all_rotor_wirings_are_bijections() {
        for model in RotorModel::ALL {
            let p = Permutation::from_wiring(model.wiring()).unwrap();
            for i in 0..26u8 {
                assert_eq!(p.invert(p.apply(i)), i, "rotor {}", model);
            }
            assert!(model.build().is_ok());
        }
    }

    #[test]
    fn test_all_reflectors_build() {
        for model in ReflectorModel::ALL {
            let reflector = model.build().unwrap();
            for i in 0..26u8 {
                assert_ne!(reflector.reflect(i), i, "reflector {}", model);
            }
        }
    }

    #[test]
    fn test_notch_counts() {
        for model in RotorModel::ALL {
            let rotor = model.build().unwrap();
            let expected = match model {
                RotorModel::VI | RotorModel::VII | RotorModel::VIII => 2,
                _ => 1,
            };
            assert_eq!(rotor.notch_letters().len(), expected, "rotor {}", model);
        }
    }

    #[test]
    fn test_rotor_from_str() {
        assert_eq!("iii".parse::<RotorModel>(), Ok(RotorModel::III));
        assert_eq!(" VIII ".parse::<RotorModel>(), Ok(RotorModel::VIII));
        assert_eq!(
            "IX".parse::<RotorModel>(),
            Err(ConfigurationError::UnknownRotor("IX".to_string()))
        );
    }

    #[test]
    fn test_reflector_from_str() {
        assert_eq!("b".parse::<ReflectorModel>(), Ok(ReflectorModel::B));
        assert_eq!(
            "D".parse::<ReflectorModel>(),
            Err(ConfigurationError::UnknownReflector("D".to_string()))
        );
    }

    #[test]
    fn test_display_matches_name() {
        for model in RotorModel::ALL {
            assert_eq!(model.to_string(), model.name());
        }
        assert_eq!(ReflectorModel::C.to_string(), "C");
    }
}
