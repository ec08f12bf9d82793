//! rotorcrypt: electromechanical rotor cipher machine simulator.
//!
//! Simulates the three-rotor Enigma I / M3 family: a plugboard, a bank of
//! three stepping rotors and a reflector. The substitution alphabet changes
//! after every key press as the rotors turn, and because the signal is
//! reflected back through the same rotors, enciphering and deciphering are
//! the same operation.
//!
//! # Architecture
//!
//! ```text
//! Permutation  (fixed bijection over A..Z with precomputed inverse)
//!     ↓ wrapped by
//! Rotor / Plugboard / Reflector
//!     ↓ rotor bank advanced by
//! stepping     (notch-triggered turnover, double-step or cascade)
//!     ↓ composed by
//! Machine      (reset + encode, configured from MachineConfig)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher a message:
//!
//! ```
//! use rotorcrypt::{Machine, MachineConfig, ReflectorModel, RotorModel};
//!
//! let config = MachineConfig::new()
//!     .with_rotors([RotorModel::II, RotorModel::IV, RotorModel::V])
//!     .with_reflector(ReflectorModel::B)
//!     .with_positions("BLA")
//!     .with_rings("BUL")
//!     .with_plugboard(&["AV BS CG DL FU HZ IN KM OW RX"]);
//!
//! let mut encoder = Machine::new(&config).unwrap();
//! let ciphertext = encoder.encode("ATTACK AT DAWN");
//!
//! let mut decoder = Machine::new(&config).unwrap();
//! assert_eq!(decoder.encode(&ciphertext), "ATTACK AT DAWN");
//! ```
//!
//! Collect a per-letter trace:
//!
//! ```
//! use rotorcrypt::{Machine, MachineConfig, TraceStep};
//!
//! let mut machine = Machine::new(&MachineConfig::default()).unwrap();
//! let mut steps: Vec<TraceStep> = Vec::new();
//! machine.encode_traced("AB", &mut steps);
//! assert_eq!(steps.len(), 2);
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod machine;
pub mod models;
pub mod permutation;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod stepping;
pub mod trace;
pub mod utils;

pub use config::MachineConfig;
pub use error::ConfigurationError;
pub use machine::{Encode, Machine};
pub use models::{ReflectorModel, RotorModel};
pub use stepping::SteppingPolicy;
pub use trace::{FnSink, Hop, NoTrace, Stage, TraceSink, TraceStep};
