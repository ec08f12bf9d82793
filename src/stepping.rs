//! Stepping mechanism: advances the rotor bank before each enciphered letter.
//!
//! The bank is ordered slowest (left) to fastest (right). Two policies are
//! supported:
//!
//! - [`SteppingPolicy::DoubleStep`] (default) models the pawl and ratchet
//!   mechanism of the Enigma I / M3. The pawl to the left of a wheel sits
//!   over that wheel's notch ring, so when it engages it pushes both wheels.
//!   A middle wheel standing on its own notch therefore steps again on the
//!   next key press and carries the left wheel with it (double-step).
//! - [`SteppingPolicy::Cascade`] is the plain odometer: the fastest wheel
//!   always steps and a wheel steps only when its faster neighbour reported
//!   passing a notch on this same key press.
//!
//! Each wheel moves at most one position per key press under both policies.

use std::fmt;
use std::str::FromStr;

use crate::rotor::Rotor;

/// How notch turnover propagates through the rotor bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SteppingPolicy {
    /// Historical pawl behaviour, including the middle-wheel double-step.
    #[default]
    DoubleStep,
    /// Odometer-style carry without the double-step anomaly.
    Cascade,
}

impl SteppingPolicy {
    pub fn name(self) -> &'static str {
        match self {
            SteppingPolicy::DoubleStep => "double-step",
            SteppingPolicy::Cascade => "cascade",
        }
    }
}

impl fmt::Display for SteppingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SteppingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "double-step" | "double" => Ok(SteppingPolicy::DoubleStep),
            "cascade" => Ok(SteppingPolicy::Cascade),
            other => Err(format!("unknown stepping policy '{}'", other)),
        }
    }
}

/// Advances `bank` (slowest first) by one key press under `policy`.
pub fn step(bank: &mut [Rotor], policy: SteppingPolicy) {
    match policy {
        SteppingPolicy::DoubleStep => step_double(bank),
        SteppingPolicy::Cascade => step_cascade(bank),
    }
}

fn step_cascade(bank: &mut [Rotor]) {
    let mut carry = true;
    for rotor in bank.iter_mut().rev() {
        if !carry {
            break;
        }
        carry = rotor.advance();
    }
}

fn step_double(bank: &mut [Rotor]) {
    let Some(fastest) = bank.len().checked_sub(1) else {
        return;
    };
    // Pawls read the notches before any wheel moves.
    let at_notch: Vec<bool> = bank.iter().map(Rotor::at_notch).collect();
    for (i, rotor) in bank.iter_mut().enumerate() {
        let pushed_by_right = i == fastest || at_notch[i + 1];
        let own_notch_engaged = i > 0 && i < fastest && at_notch[i];
        if pushed_by_right || own_notch_engaged {
            rotor.advance();
        }
    }
}
