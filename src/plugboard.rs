//! Plugboard (Steckerbrett): swaps up to ten disjoint letter pairs before
//! and after the rotor path.

use crate::error::ConfigurationError;
use crate::permutation::Permutation;
use crate::utils::converter::{index_to_letter, letter_to_index, ALPHABET_LEN};

/// Number of cables supplied with the machine.
pub const MAX_PAIRS: usize = 10;

/// A self-inverse letter exchange built from disjoint pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plugboard {
    permutation: Permutation,
    pairs: usize,
}

impl Plugboard {
    /// Returns an unplugged board (identity mapping).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a plugboard from pairs such as `["AV", "BS"]`.
    ///
    /// # Errors
    /// - [`ConfigurationError::TooManyPlugboardPairs`] for more than 10 pairs.
    /// - [`ConfigurationError::PlugboardPair`] if a pair is not two distinct letters.
    /// - [`ConfigurationError::PlugboardLetterReused`] if a letter is already plugged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::plugboard::Plugboard;
    ///
    /// let board = Plugboard::from_pairs(&["AV", "BS"]).unwrap();
    /// assert_eq!(board.forward(0), 21);
    /// assert_eq!(board.forward(21), 0);
    /// ```
    pub fn from_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self, ConfigurationError> {
        if pairs.len() > MAX_PAIRS {
            return Err(ConfigurationError::TooManyPlugboardPairs(pairs.len()));
        }
        let mut table = [0u8; ALPHABET_LEN];
        for (i, item) in table.iter_mut().enumerate() {
            *item = i as u8;
        }
        let mut used = [false; ALPHABET_LEN];
        for pair in pairs {
            let pair = pair.as_ref();
            let (a, b) = parse_pair(pair)?;
            for letter in [a, b] {
                if used[letter as usize] {
                    return Err(ConfigurationError::PlugboardLetterReused(index_to_letter(
                        letter,
                    )));
                }
                used[letter as usize] = true;
            }
            table[a as usize] = b;
            table[b as usize] = a;
        }
        Ok(Plugboard {
            permutation: Permutation::from_table(table)?,
            pairs: pairs.len(),
        })
    }

    /// Parses a space separated pair list such as `"AV BS CG"`.
    ///
    /// # Errors
    /// Same as [`from_pairs`](Self::from_pairs).
    pub fn parse(pairs: &str) -> Result<Self, ConfigurationError> {
        let pairs: Vec<&str> = pairs.split_whitespace().collect();
        Self::from_pairs(&pairs)
    }

    /// Number of plugged pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    /// Substitution on the way into the rotors.
    pub fn forward(&self, letter: u8) -> u8 {
        self.permutation.apply(letter)
    }

    /// Substitution on the way back out. Identical to
    /// [`forward`](Self::forward) since the mapping is an involution.
    pub fn backward(&self, letter: u8) -> u8 {
        self.permutation.invert(letter)
    }
}

fn parse_pair(pair: &str) -> Result<(u8, u8), ConfigurationError> {
    let invalid = || ConfigurationError::PlugboardPair(pair.to_string());
    let mut chars = pair.chars();
    let a = chars.next().and_then(letter_to_index).ok_or_else(invalid)?;
    let b = chars.next().and_then(letter_to_index).ok_or_else(invalid)?;
    if chars.next().is_some() || a == b {
        return Err(invalid());
    }
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARBAROSSA: [&str; 10] = ["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"];

    #[test]
    fn test_empty_board_is_identity() {
        let board = Plugboard::new();
        for i in 0..26u8 {
            assert_eq!(board.forward(i), i);
            assert_eq!(board.backward(i), i);
        }
        assert_eq!(board.pair_count(), 0);
    }

    #[test]
    fn test_full_board_is_involution() {
        let board = Plugboard::from_pairs(&BARBAROSSA).unwrap();
        assert_eq!(board.pair_count(), 10);
        for i in 0..26u8 {
            assert_eq!(board.forward(board.forward(i)), i);
            assert_eq!(board.forward(i), board.backward(i));
        }
        // E, J, P, Q, T, Y are left unplugged
        for c in ['E', 'J', 'P', 'Q', 'T', 'Y'] {
            let i = letter_to_index(c).unwrap();
            assert_eq!(board.forward(i), i);
        }
    }

    #[test]
    fn test_parse_and_lowercase() {
        let board = Plugboard::parse("  av bs ").unwrap();
        assert_eq!(board, Plugboard::from_pairs(&["AV", "BS"]).unwrap());
    }

    #[test]
    fn test_too_many_pairs() {
        let mut pairs = BARBAROSSA.to_vec();
        pairs.push("EJ");
        assert_eq!(
            Plugboard::from_pairs(&pairs),
            Err(ConfigurationError::TooManyPlugboardPairs(11))
        );
    }

    #[test]
    fn test_letter_reused() {
        assert_eq!(
            Plugboard::from_pairs(&["AB", "CA"]),
            Err(ConfigurationError::PlugboardLetterReused('A'))
        );
    }

    #[test]
    fn test_malformed_pairs() {
        for bad in ["A", "ABC", "AA", "A1", ""] {
            assert_eq!(
                Plugboard::from_pairs(&[bad]),
                Err(ConfigurationError::PlugboardPair(bad.to_string())),
                "pair '{}' should be rejected",
                bad
            );
        }
    }
}
