//! Property-based tests for the cipher machine.
//!
//! These check the algebraic properties every key setting must satisfy:
//! reciprocity, plugboard involution, non-letter passthrough, the absence
//! of self-enciphered letters, and permutation/inverse consistency.

use proptest::prelude::*;

use rotorcrypt::permutation::Permutation;
use rotorcrypt::plugboard::Plugboard;
use rotorcrypt::{Machine, MachineConfig, ReflectorModel, RotorModel, SteppingPolicy};

fn letters(indices: &[u8]) -> String {
    indices.iter().map(|&i| (b'A' + i) as char).collect()
}

fn shuffled_alphabet() -> impl Strategy<Value = Vec<u8>> {
    Just((0..26u8).collect::<Vec<u8>>()).prop_shuffle()
}

/// Up to ten disjoint pairs drawn from a shuffled alphabet.
fn plug_pairs() -> impl Strategy<Value = Vec<String>> {
    (shuffled_alphabet(), 0usize..=10).prop_map(|(alphabet, count)| {
        alphabet
            .chunks(2)
            .take(count)
            .map(letters)
            .collect()
    })
}

fn setting() -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..26, 3).prop_map(|v| letters(&v))
}

fn machine_config() -> impl Strategy<Value = MachineConfig> {
    (
        prop::sample::subsequence(RotorModel::ALL.to_vec(), 3).prop_shuffle(),
        prop::sample::select(ReflectorModel::ALL.to_vec()),
        setting(),
        setting(),
        plug_pairs(),
        prop::bool::ANY,
    )
        .prop_map(|(rotors, reflector, positions, rings, plugs, cascade)| {
            let stepping = if cascade {
                SteppingPolicy::Cascade
            } else {
                SteppingPolicy::DoubleStep
            };
            MachineConfig::new()
                .with_rotors([rotors[0], rotors[1], rotors[2]])
                .with_reflector(reflector)
                .with_positions(&positions)
                .with_rings(&rings)
                .with_plugboard(&plugs)
                .with_stepping(stepping)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reciprocity(config in machine_config(), text in "[ -~]{0,120}") {
        let ciphertext = Machine::new(&config).unwrap().encode(&text);
        let roundtrip = Machine::new(&config).unwrap().encode(&ciphertext);
        prop_assert_eq!(roundtrip, text.to_ascii_uppercase());
    }

    #[test]
    fn no_letter_enciphers_to_itself(config in machine_config(), text in "[A-Z]{1,120}") {
        let ciphertext = Machine::new(&config).unwrap().encode(&text);
        for (p, c) in text.chars().zip(ciphertext.chars()) {
            prop_assert_ne!(p, c);
        }
    }

    #[test]
    fn non_letters_pass_through(config in machine_config(), text in "\\PC{0,80}") {
        let ciphertext = Machine::new(&config).unwrap().encode(&text);
        prop_assert_eq!(ciphertext.chars().count(), text.chars().count());
        for (p, c) in text.chars().zip(ciphertext.chars()) {
            if p.is_ascii_alphabetic() {
                prop_assert!(c.is_ascii_uppercase());
            } else {
                prop_assert_eq!(p, c);
            }
        }
    }

    #[test]
    fn non_letters_do_not_step(config in machine_config(), text in "[A-Za-z0-9 ,.]{0,80}") {
        let mut with_noise = Machine::new(&config).unwrap();
        let mut letters_only = Machine::new(&config).unwrap();
        let stripped: String = text.chars().filter(char::is_ascii_alphabetic).collect();
        let noisy = with_noise.encode(&text);
        let clean = letters_only.encode(&stripped);
        let noisy_letters: String = noisy.chars().filter(char::is_ascii_alphabetic).collect();
        prop_assert_eq!(noisy_letters, clean);
        prop_assert_eq!(with_noise.positions(), letters_only.positions());
    }

    #[test]
    fn plugboard_is_involution(pairs in plug_pairs()) {
        let board = Plugboard::from_pairs(&pairs).unwrap();
        prop_assert_eq!(board.pair_count(), pairs.len());
        for x in 0..26u8 {
            let y = board.forward(x);
            prop_assert_eq!(board.forward(y), x);
            prop_assert_eq!(board.backward(x), y);
        }
    }

    #[test]
    fn permutation_inverse_consistent(table in shuffled_alphabet()) {
        let p = Permutation::from_wiring(&letters(&table)).unwrap();
        for i in 0..26u8 {
            prop_assert_eq!(p.apply(i), table[i as usize]);
            prop_assert_eq!(p.invert(p.apply(i)), i);
        }
    }

    #[test]
    fn reset_replays_keystream(config in machine_config(), text in "[A-Z]{1,60}") {
        let mut m = Machine::new(&config).unwrap();
        let first = m.encode(&text);
        m.reset(&config.positions, &config.rings).unwrap();
        prop_assert_eq!(m.encode(&text), first);
    }
}
