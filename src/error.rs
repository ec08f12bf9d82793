//! Error types for the rotorcrypt library.
//!
//! Every failure is a configuration failure detected before the first
//! character of a message is processed. Encoding itself cannot fail.

use thiserror::Error;

/// Errors produced while building or resetting a [`Machine`](crate::Machine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Wiring string does not contain exactly 26 symbols.
    #[error("Wiring must contain exactly 26 letters, got {0}")]
    WiringLength(usize),
    /// Wiring contains a symbol outside `A..Z`.
    #[error("Wiring contains non-alphabetic symbol '{0}'")]
    WiringNotAlphabetic(char),
    /// Wiring maps two inputs to the same letter.
    #[error("Wiring repeats letter '{0}'")]
    WiringRepeatedLetter(char),
    /// Notch specification contains a symbol outside `A..Z`.
    #[error("Invalid notch letter '{0}'")]
    InvalidNotch(char),
    /// Rotor setting (Grundstellung) is not exactly 3 letters.
    #[error("Invalid rotor setting '{0}': expected exactly 3 letters")]
    InvalidSetting(String),
    /// Ring setting (Ringstellung) is not exactly 3 letters.
    #[error("Invalid ring setting '{0}': expected exactly 3 letters")]
    InvalidRings(String),
    /// Plugboard pair is not two distinct letters.
    #[error("Invalid plugboard pair '{0}': expected two distinct letters")]
    PlugboardPair(String),
    /// Plugboard letter appears in more than one pair.
    #[error("Plugboard letter '{0}' reused")]
    PlugboardLetterReused(char),
    /// More plugboard pairs than cables.
    #[error("Too many plugboard pairs: {0} (maximum 10)")]
    TooManyPlugboardPairs(usize),
    /// Rotor name not present in the catalogue.
    #[error("Unknown rotor '{0}'")]
    UnknownRotor(String),
    /// Reflector name not present in the catalogue.
    #[error("Unknown reflector '{0}'")]
    UnknownReflector(String),
    /// Reflector wiring is not its own inverse.
    #[error("Reflector wiring is not self-inverse")]
    ReflectorNotInvolution,
    /// Reflector wiring maps a letter onto itself.
    #[error("Reflector wiring maps '{0}' to itself")]
    ReflectorFixedPoint(char),
    /// Rotor bank does not have exactly 3 rotors.
    #[error("Expected 3 rotors, got {0}")]
    RotorCount(usize),
}
