//! Rotor: a wired wheel with a ring offset, a rotating position and
//! turnover notches.
//!
//! The ring setting (Ringstellung) and the window position (Grundstellung)
//! are kept as separate fields. A lookup shifts the contact by
//! `position - ring`, passes it through the wiring and shifts it back, so
//! the ring moves the wiring relative to the letter ring independently of
//! how far the wheel has turned.

use crate::error::ConfigurationError;
use crate::permutation::Permutation;
use crate::utils::converter::{index_to_letter, letter_to_index, shift, ALPHABET_LEN};

/// A single cipher wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    ring: u8,
    position: u8,
    /// Bit `i` set when position `i` is a turnover position.
    notches: u32,
    rotating: bool,
}

impl Rotor {
    /// Creates a rotor from a wiring string and its turnover letters.
    ///
    /// An empty `notches` string yields a non-rotating wheel.
    ///
    /// # Parameters
    /// - `name`: Display name, e.g. `"VI"`.
    /// - `wiring`: 26-letter wiring string.
    /// - `notches`: Turnover letters, e.g. `"Q"` or `"ZM"` (either case).
    ///
    /// # Errors
    /// Propagates wiring errors from [`Permutation::from_wiring`] and returns
    /// [`ConfigurationError::InvalidNotch`] for a non-letter notch.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::rotor::Rotor;
    ///
    /// let rotor = Rotor::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap();
    /// assert!(rotor.is_rotating());
    /// assert_eq!(rotor.notch_letters(), "Q");
    /// ```
    pub fn new(name: &str, wiring: &str, notches: &str) -> Result<Self, ConfigurationError> {
        let permutation = Permutation::from_wiring(wiring)?;
        let mut mask = 0u32;
        for c in notches.chars() {
            let index = letter_to_index(c).ok_or(ConfigurationError::InvalidNotch(c))?;
            mask |= 1u32 << index;
        }
        Ok(Rotor {
            name: name.to_string(),
            permutation,
            ring: 0,
            position: 0,
            notches: mask,
            rotating: mask != 0,
        })
    }

    /// Creates a wheel that never steps.
    pub fn fixed(name: &str, wiring: &str) -> Result<Self, ConfigurationError> {
        Self::new(name, wiring, "")
    }

    /// Display name of the rotor.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current window position (`0..26`).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Current ring setting (`0..26`).
    pub fn ring(&self) -> u8 {
        self.ring
    }

    /// Whether the stepping mechanism may move this wheel.
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Turnover letters in alphabetical order.
    pub fn notch_letters(&self) -> String {
        (0..ALPHABET_LEN as u8)
            .filter(|&i| self.notches & (1u32 << i) != 0)
            .map(index_to_letter)
            .collect()
    }

    /// True if the wheel currently shows a turnover position.
    pub fn at_notch(&self) -> bool {
        self.notches & (1u32 << self.position) != 0
    }

    pub(crate) fn set_position(&mut self, position: u8) {
        self.position = position % ALPHABET_LEN as u8;
    }

    pub(crate) fn set_ring(&mut self, ring: u8) {
        self.ring = ring % ALPHABET_LEN as u8;
    }

    fn offset(&self) -> i32 {
        self.position as i32 - self.ring as i32
    }

    /// Passes a contact through the wiring towards the reflector.
    pub fn forward(&self, letter: u8) -> u8 {
        let offset = self.offset();
        shift(self.permutation.apply(shift(letter, offset)), -offset)
    }

    /// Passes a contact back through the wiring from the reflector.
    pub fn backward(&self, letter: u8) -> u8 {
        let offset = self.offset();
        shift(self.permutation.invert(shift(letter, offset)), -offset)
    }

    /// Moves the wheel one position.
    ///
    /// # Returns
    /// `true` if the position before moving was a turnover position, which
    /// tells the stepping mechanism to carry into the next slower wheel.
    /// A non-rotating wheel never moves and always returns `false`.
    pub fn advance(&mut self) -> bool {
        if !self.rotating {
            return false;
        }
        let hit_notch = self.at_notch();
        self.position = (self.position + 1) % ALPHABET_LEN as u8;
        hit_notch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

    fn rotor_i() -> Rotor {
        Rotor::new("I", ROTOR_I, "Q").unwrap()
    }

    #[test]
    fn test_forward_at_origin_is_wiring() {
        let rotor = rotor_i();
        assert_eq!(rotor.forward(0), 4); // A -> E
        assert_eq!(rotor.forward(25), 9); // Z -> J
    }

    #[test]
    fn test_backward_inverts_forward() {
        let mut rotor = rotor_i();
        for position in [0u8, 5, 17, 25] {
            for ring in [0u8, 1, 13] {
                rotor.set_position(position);
                rotor.set_ring(ring);
                for letter in 0..26u8 {
                    assert_eq!(rotor.backward(rotor.forward(letter)), letter);
                }
            }
        }
    }

    #[test]
    fn test_forward_with_position() {
        // Position B: A enters on contact B, wired to K, leaves as J.
        let mut rotor = rotor_i();
        rotor.set_position(1);
        assert_eq!(rotor.forward(0), 9);
    }

    #[test]
    fn test_forward_with_ring() {
        // Ring B at position A: A enters on contact Z, wired to J, leaves as K.
        let mut rotor = rotor_i();
        rotor.set_ring(1);
        assert_eq!(rotor.forward(0), 10);
    }

    #[test]
    fn test_equal_ring_and_position_cancel() {
        let mut rotor = rotor_i();
        rotor.set_position(7);
        rotor.set_ring(7);
        let origin = rotor_i();
        for letter in 0..26u8 {
            assert_eq!(rotor.forward(letter), origin.forward(letter));
        }
    }

    #[test]
    fn test_advance_reports_notch_before_moving() {
        let mut rotor = rotor_i();
        rotor.set_position(15); // P
        assert!(!rotor.advance());
        assert_eq!(rotor.position(), 16); // Q
        assert!(rotor.advance());
        assert_eq!(rotor.position(), 17); // R
    }

    #[test]
    fn test_advance_wraps() {
        let mut rotor = rotor_i();
        rotor.set_position(25);
        rotor.advance();
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn test_double_notch() {
        let mut rotor = Rotor::new("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "zm").unwrap();
        assert_eq!(rotor.notch_letters(), "MZ");
        let mut hits = 0;
        for _ in 0..26 {
            if rotor.advance() {
                hits += 1;
            }
        }
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_fixed_rotor_never_moves() {
        let mut rotor = Rotor::fixed("ETW", "ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert!(!rotor.is_rotating());
        assert!(!rotor.advance());
        assert_eq!(rotor.position(), 0);
        assert!(!rotor.at_notch());
    }

    #[test]
    fn test_invalid_notch() {
        assert_eq!(
            Rotor::new("X", ROTOR_I, "Q!"),
            Err(ConfigurationError::InvalidNotch('!'))
        );
    }

    #[test]
    fn test_invalid_wiring_propagates() {
        assert_eq!(
            Rotor::new("X", "ABC", "Q"),
            Err(ConfigurationError::WiringLength(3))
        );
    }
}
