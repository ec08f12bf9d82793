//! Permutation: fixed bijection over the 26-letter alphabet.
//!
//! Every wired component of the machine (rotor, reflector, plugboard) is
//! backed by a [`Permutation`]. The forward table and its inverse are both
//! computed once at construction, so either direction is a single lookup.

use crate::error::ConfigurationError;
use crate::utils::converter::{index_to_letter, ALPHABET_LEN};

/// A bijection on contact indices `0..26` together with its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Permutation {
    /// Returns the identity mapping (`A->A`, `B->B`, ...).
    pub fn identity() -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        for (i, item) in forward.iter_mut().enumerate() {
            *item = i as u8;
        }
        Permutation {
            forward,
            inverse: forward,
        }
    }

    /// Builds a permutation from a wiring string such as
    /// `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`, where the letter at position `i` is
    /// the output for input `i`. Lowercase letters are accepted.
    ///
    /// # Errors
    /// - [`ConfigurationError::WiringLength`] if the string is not 26 symbols.
    /// - [`ConfigurationError::WiringNotAlphabetic`] for a symbol outside `A..Z`.
    /// - [`ConfigurationError::WiringRepeatedLetter`] if a letter appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::permutation::Permutation;
    ///
    /// let p = Permutation::from_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(p.apply(0), 4);
    /// assert_eq!(p.invert(4), 0);
    /// ```
    pub fn from_wiring(wiring: &str) -> Result<Self, ConfigurationError> {
        let count = wiring.chars().count();
        if count != ALPHABET_LEN {
            return Err(ConfigurationError::WiringLength(count));
        }
        let mut forward = [0u8; ALPHABET_LEN];
        for (slot, c) in forward.iter_mut().zip(wiring.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(ConfigurationError::WiringNotAlphabetic(c));
            }
            *slot = c.to_ascii_uppercase() as u8 - b'A';
        }
        Self::from_table(forward)
    }

    /// Builds a permutation from a raw forward table.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::WiringRepeatedLetter`] if `forward` is
    /// not a bijection, or [`ConfigurationError::WiringNotAlphabetic`] if an
    /// entry is outside `0..26`.
    pub fn from_table(forward: [u8; ALPHABET_LEN]) -> Result<Self, ConfigurationError> {
        const UNSET: u8 = u8::MAX;
        let mut inverse = [UNSET; ALPHABET_LEN];
        for (i, &out) in forward.iter().enumerate() {
            if out as usize >= ALPHABET_LEN {
                return Err(ConfigurationError::WiringNotAlphabetic(out as char));
            }
            if inverse[out as usize] != UNSET {
                return Err(ConfigurationError::WiringRepeatedLetter(index_to_letter(out)));
            }
            inverse[out as usize] = i as u8;
        }
        Ok(Permutation { forward, inverse })
    }

    /// Forward lookup.
    pub fn apply(&self, letter: u8) -> u8 {
        self.forward[letter as usize]
    }

    /// Inverse lookup: `invert(apply(x)) == x`.
    pub fn invert(&self, letter: u8) -> u8 {
        self.inverse[letter as usize]
    }

    /// True if the mapping is its own inverse.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Returns the first letter mapped onto itself, if any.
    pub fn fixed_point(&self) -> Option<u8> {
        (0..ALPHABET_LEN as u8).find(|&i| self.apply(i) == i)
    }

    /// Renders the forward table as a wiring string.
    pub fn wiring(&self) -> String {
        self.forward.iter().map(|&i| index_to_letter(i)).collect()
    }
}
