//! Machine: rotor bank, plugboard and reflector wired together.
//!
//! Signal path for every enciphered letter, after the bank has stepped:
//!
//! ```text
//! key -> plugboard -> R(fast) -> R(middle) -> R(slow) -> reflector
//!                                                          |
//! lamp <- plugboard <- R(fast) <- R(middle) <- R(slow) <---+
//! ```
//!
//! The plugboard and reflector are involutions and the rotors are crossed
//! once in each direction, so the whole substitution is its own inverse:
//! a machine reset to the same key turns ciphertext back into plaintext.

use std::str::Chars;

use tracing::{debug, trace};

use crate::config::{parse_positions, parse_rings, MachineConfig};
use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::stepping::{self, SteppingPolicy};
use crate::trace::{Hop, NoTrace, Stage, TraceSink, TraceStep};
use crate::utils::converter::{index_to_letter, indices_to_string, letter_to_index, ROTOR_SLOTS};

/// Rotor cipher machine.
///
/// # Architecture
///
/// Rotors are held slowest (left) first, so slot `i` is addressed by the
/// `i`-th letter of a window or ring setting. The machine owns all of its
/// components; stepping mutates only the rotor positions.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: [Rotor; ROTOR_SLOTS],
    reflector: Reflector,
    plugboard: Plugboard,
    stepping: SteppingPolicy,
}

impl Machine {
    /// Builds and resets a machine from a configuration.
    ///
    /// # Parameters
    /// - `config`: Rotor order, reflector, window and ring letters,
    ///   plugboard pairs and stepping policy.
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`] found. Nothing is built if
    /// any part of the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, MachineConfig};
    ///
    /// let mut machine = Machine::new(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.encode("AAAA"), "FTZM");
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self, ConfigurationError> {
        let positions = config.position_indices()?;
        let rings = config.ring_indices()?;
        let plugboard = Plugboard::from_pairs(&config.plugboard)?;
        let reflector = config.reflector.build()?;
        let rotors = config
            .rotors
            .iter()
            .map(|model| model.build())
            .collect::<Result<Vec<_>, _>>()?;

        let mut machine = Self::from_components(rotors, reflector, plugboard, config.stepping)?;
        machine.apply_settings(positions, rings);
        debug!(
            rotors = ?config.rotors,
            reflector = %config.reflector,
            positions = %config.positions,
            rings = %config.rings,
            plugs = machine.plugboard.pair_count(),
            stepping = %config.stepping,
            "machine configured"
        );
        Ok(machine)
    }

    /// Assembles a machine from already built parts.
    ///
    /// Useful for non-catalogue wirings. Rotors are given slowest first and
    /// keep whatever positions and rings they carry.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::RotorCount`] unless exactly 3 rotors
    /// are supplied.
    pub fn from_components(
        rotors: Vec<Rotor>,
        reflector: Reflector,
        plugboard: Plugboard,
        stepping: SteppingPolicy,
    ) -> Result<Self, ConfigurationError> {
        let rotors: [Rotor; ROTOR_SLOTS] = rotors
            .try_into()
            .map_err(|rejected: Vec<Rotor>| ConfigurationError::RotorCount(rejected.len()))?;
        Ok(Machine {
            rotors,
            reflector,
            plugboard,
            stepping,
        })
    }

    /// Sets every rotor's window and ring letter.
    ///
    /// The rightmost letter of each setting addresses the fastest rotor.
    /// Wiring and notches are left untouched.
    ///
    /// # Parameters
    /// - `positions`: Window letters (Grundstellung), e.g. `"OKW"`.
    /// - `rings`: Ring letters (Ringstellung), e.g. `"AAA"`.
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidSetting`] or
    /// [`ConfigurationError::InvalidRings`] unless both are exactly 3
    /// letters. On error the machine is left as it was.
    pub fn reset(&mut self, positions: &str, rings: &str) -> Result<(), ConfigurationError> {
        let position_indices = parse_positions(positions)?;
        let ring_indices = parse_rings(rings)?;
        self.apply_settings(position_indices, ring_indices);
        debug!(positions, rings, "machine reset");
        Ok(())
    }

    fn apply_settings(&mut self, positions: [u8; ROTOR_SLOTS], rings: [u8; ROTOR_SLOTS]) {
        for ((rotor, position), ring) in self.rotors.iter_mut().zip(positions).zip(rings) {
            rotor.set_position(position);
            rotor.set_ring(ring);
        }
    }

    /// Rotors, slowest first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    pub fn stepping(&self) -> SteppingPolicy {
        self.stepping
    }

    /// Current window letters, slowest first.
    pub fn positions(&self) -> String {
        let positions: Vec<u8> = self.rotors.iter().map(Rotor::position).collect();
        indices_to_string(&positions)
    }

    /// Advances the rotor bank by one key press without enciphering.
    pub fn step(&mut self) {
        stepping::step(&mut self.rotors, self.stepping);
    }

    /// Enciphers (or deciphers) `text`.
    ///
    /// ASCII letters are upper-cased and enciphered, stepping the rotors
    /// once each. Every other character is copied through unchanged and
    /// does not move the rotors, so word spacing survives without
    /// affecting the keystream.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, MachineConfig};
    ///
    /// let config = MachineConfig::default().with_positions("OKW");
    /// let mut machine = Machine::new(&config).unwrap();
    /// let ciphertext = machine.encode("Enigma");
    ///
    /// machine.reset("OKW", "AAA").unwrap();
    /// assert_eq!(machine.encode(&ciphertext), "ENIGMA");
    /// ```
    pub fn encode(&mut self, text: &str) -> String {
        self.encode_traced(text, NoTrace)
    }

    /// Like [`encode`](Self::encode), reporting every enciphered letter to `sink`.
    pub fn encode_traced<S: TraceSink>(&mut self, text: &str, sink: S) -> String {
        self.encode_iter_traced(text, sink).collect()
    }

    /// Lazy form of [`encode`](Self::encode): rotors step only as the
    /// iterator is advanced.
    pub fn encode_iter<'m, 't>(&'m mut self, text: &'t str) -> Encode<'m, 't, NoTrace> {
        self.encode_iter_traced(text, NoTrace)
    }

    /// Lazy form of [`encode_traced`](Self::encode_traced).
    pub fn encode_iter_traced<'m, 't, S: TraceSink>(
        &'m mut self,
        text: &'t str,
        sink: S,
    ) -> Encode<'m, 't, S> {
        Encode {
            machine: self,
            chars: text.chars(),
            sink,
        }
    }

    fn encode_char<S: TraceSink>(&mut self, c: char, sink: &mut S) -> char {
        match letter_to_index(c) {
            Some(letter) => index_to_letter(self.encipher(letter, sink)),
            None => c,
        }
    }

    fn encipher<S: TraceSink>(&mut self, input: u8, sink: &mut S) -> u8 {
        self.step();

        let recording = sink.enabled();
        let mut hops = Vec::new();
        let mut hop = |stage: Stage, input: u8, output: u8| {
            if recording {
                hops.push(Hop {
                    stage,
                    input,
                    output,
                });
            }
            output
        };

        let mut c = hop(Stage::PlugboardIn, input, self.plugboard.forward(input));
        for slot in (0..ROTOR_SLOTS).rev() {
            c = hop(Stage::RotorForward(slot), c, self.rotors[slot].forward(c));
        }
        c = hop(Stage::Reflector, c, self.reflector.reflect(c));
        for slot in 0..ROTOR_SLOTS {
            c = hop(Stage::RotorBackward(slot), c, self.rotors[slot].backward(c));
        }
        let output = hop(Stage::PlugboardOut, c, self.plugboard.backward(c));

        if recording {
            sink.record(&TraceStep {
                positions: self.rotors.iter().map(Rotor::position).collect(),
                input,
                hops,
                output,
            });
        }
        trace!(
            positions = %self.positions(),
            input = %index_to_letter(input),
            output = %index_to_letter(output),
            "enciphered letter"
        );
        output
    }
}

/// Iterator returned by [`Machine::encode_iter`].
pub struct Encode<'m, 't, S: TraceSink> {
    machine: &'m mut Machine,
    chars: Chars<'t>,
    sink: S,
}

impl<S: TraceSink> Iterator for Encode<'_, '_, S> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        Some(self.machine.encode_char(c, &mut self.sink))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}
