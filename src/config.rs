//! Machine configuration.
//!
//! [`MachineConfig`] is the single value a [`Machine`](crate::Machine) is
//! built from. Everything is validated eagerly by
//! [`validate`](MachineConfig::validate) so a bad setting is reported
//! before the first letter of a message is touched.

use crate::error::ConfigurationError;
use crate::models::{ReflectorModel, RotorModel};
use crate::plugboard::Plugboard;
use crate::stepping::SteppingPolicy;
use crate::utils::converter::{parse_triplet, ROTOR_SLOTS};

/// Complete key setting for one machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Rotor order, slowest (left) first.
    pub rotors: [RotorModel; ROTOR_SLOTS],
    pub reflector: ReflectorModel,
    /// Window letters (Grundstellung), slowest first.
    pub positions: String,
    /// Ring letters (Ringstellung), slowest first.
    pub rings: String,
    /// Plugboard pairs such as `"AV"`.
    pub plugboard: Vec<String>,
    pub stepping: SteppingPolicy,
}

impl Default for MachineConfig {
    /// Rotors III, II, I (rotor I fastest), reflector B, `AAA`, `AAA`,
    /// no plugs, double-step.
    fn default() -> Self {
        MachineConfig {
            rotors: [RotorModel::III, RotorModel::II, RotorModel::I],
            reflector: ReflectorModel::B,
            positions: "AAA".to_string(),
            rings: "AAA".to_string(),
            plugboard: Vec::new(),
            stepping: SteppingPolicy::default(),
        }
    }
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rotor order, slowest first.
    pub fn with_rotors(mut self, rotors: [RotorModel; ROTOR_SLOTS]) -> Self {
        self.rotors = rotors;
        self
    }

    /// Sets the rotor order from names such as `["I", "II", "III"]`.
    ///
    /// # Errors
    /// [`ConfigurationError::RotorCount`] unless exactly 3 names are given,
    /// [`ConfigurationError::UnknownRotor`] for an unknown name.
    pub fn with_rotor_names<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self, ConfigurationError> {
        if names.len() != ROTOR_SLOTS {
            return Err(ConfigurationError::RotorCount(names.len()));
        }
        for (slot, name) in self.rotors.iter_mut().zip(names) {
            *slot = name.as_ref().parse()?;
        }
        Ok(self)
    }

    pub fn with_reflector(mut self, reflector: ReflectorModel) -> Self {
        self.reflector = reflector;
        self
    }

    pub fn with_positions(mut self, positions: &str) -> Self {
        self.positions = positions.to_string();
        self
    }

    pub fn with_rings(mut self, rings: &str) -> Self {
        self.rings = rings.to_string();
        self
    }

    /// Adds plugboard pairs. Accepts both `"AV"` items and space separated
    /// lists such as `"AV BS"`.
    pub fn with_plugboard<S: AsRef<str>>(mut self, pairs: &[S]) -> Self {
        self.plugboard.extend(
            pairs
                .iter()
                .flat_map(|p| p.as_ref().split_whitespace())
                .map(str::to_string),
        );
        self
    }

    pub fn with_stepping(mut self, stepping: SteppingPolicy) -> Self {
        self.stepping = stepping;
        self
    }

    /// Parses the window letters.
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidSetting`] unless exactly 3 letters.
    pub fn position_indices(&self) -> Result<[u8; ROTOR_SLOTS], ConfigurationError> {
        parse_positions(&self.positions)
    }

    /// Parses the ring letters.
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidRings`] unless exactly 3 letters.
    pub fn ring_indices(&self) -> Result<[u8; ROTOR_SLOTS], ConfigurationError> {
        parse_rings(&self.rings)
    }

    /// Checks every field without building a machine.
    ///
    /// # Errors
    /// The first [`ConfigurationError`] found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.position_indices()?;
        self.ring_indices()?;
        Plugboard::from_pairs(&self.plugboard)?;
        Ok(())
    }
}

pub(crate) fn parse_positions(positions: &str) -> Result<[u8; ROTOR_SLOTS], ConfigurationError> {
    parse_triplet(positions).ok_or_else(|| ConfigurationError::InvalidSetting(positions.to_string()))
}

pub(crate) fn parse_rings(rings: &str) -> Result<[u8; ROTOR_SLOTS], ConfigurationError> {
    parse_triplet(rings).ok_or_else(|| ConfigurationError::InvalidRings(rings.to_string()))
}
