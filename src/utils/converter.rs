//! Letter-to-index conversion utilities.
//!
//! The engine works on contact indices `0..26` where `A = 0` and `Z = 25`.
//! Only ASCII letters take part in enciphering; any other character is
//! reported as `None` and left to the caller.

/// Number of contacts on every rotor, reflector and plugboard.
pub const ALPHABET_LEN: usize = 26;

/// Number of rotor slots in the machine.
pub const ROTOR_SLOTS: usize = 3;

/// Converts an ASCII letter (either case) to its contact index.
///
/// # Returns
/// `Some(0..26)` for `A..Z` / `a..z`, `None` for anything else.
pub fn letter_to_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Converts a contact index to its uppercase letter.
///
/// The index is reduced modulo 26 first.
pub fn index_to_letter(index: u8) -> char {
    (b'A' + index % ALPHABET_LEN as u8) as char
}

/// Shifts a contact index by a signed offset, wrapping around the alphabet.
pub fn shift(index: u8, offset: i32) -> u8 {
    (index as i32 + offset).rem_euclid(ALPHABET_LEN as i32) as u8
}

/// Parses a window or ring setting such as `"OKW"` into contact indices.
///
/// The first letter addresses the slowest (leftmost) slot and the last
/// letter the fastest (rightmost) slot.
///
/// # Returns
/// `None` unless `setting` is exactly three ASCII letters.
pub fn parse_triplet(setting: &str) -> Option<[u8; ROTOR_SLOTS]> {
    let mut out = [0u8; ROTOR_SLOTS];
    let mut chars = setting.chars();
    for slot in out.iter_mut() {
        *slot = letter_to_index(chars.next()?)?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(out)
}

/// Renders contact indices as letters, e.g. `[14, 10, 22]` -> `"OKW"`.
pub fn indices_to_string(indices: &[u8]) -> String {
    indices.iter().map(|&i| index_to_letter(i)).collect()
}
