//! Reflector (Umkehrwalze): turns the signal back through the rotor bank.

use crate::error::ConfigurationError;
use crate::permutation::Permutation;
use crate::utils::converter::index_to_letter;

/// A fixed, self-inverse wiring with no letter mapped onto itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    permutation: Permutation,
}

impl Reflector {
    /// Creates a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    /// Propagates wiring errors, and returns
    /// [`ConfigurationError::ReflectorNotInvolution`] or
    /// [`ConfigurationError::ReflectorFixedPoint`] for wirings that could
    /// not be realised as paired contacts.
    pub fn new(name: &str, wiring: &str) -> Result<Self, ConfigurationError> {
        let permutation = Permutation::from_wiring(wiring)?;
        if !permutation.is_involution() {
            return Err(ConfigurationError::ReflectorNotInvolution);
        }
        if let Some(letter) = permutation.fixed_point() {
            return Err(ConfigurationError::ReflectorFixedPoint(index_to_letter(letter)));
        }
        Ok(Reflector {
            name: name.to_string(),
            permutation,
        })
    }

    /// Display name of the reflector.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Single lookup, applied once per character.
    pub fn reflect(&self, letter: u8) -> u8 {
        self.permutation.apply(letter)
    }
}
