//! Per-letter signal trace.
//!
//! A [`TraceSink`] is handed to [`Machine::encode_traced`](crate::Machine::encode_traced)
//! and receives one [`TraceStep`] for every enciphered letter: the rotor
//! window after stepping, and the contact entering and leaving each stage.

use std::fmt;

use crate::utils::converter::{index_to_letter, indices_to_string};

/// Component a letter passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PlugboardIn,
    /// Rotor in the given slot (0 = slowest) on the way to the reflector.
    RotorForward(usize),
    Reflector,
    /// Rotor in the given slot on the way back from the reflector.
    RotorBackward(usize),
    PlugboardOut,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::PlugboardIn | Stage::PlugboardOut => f.write_str("P"),
            Stage::RotorForward(slot) | Stage::RotorBackward(slot) => write!(f, "R{}", slot),
            Stage::Reflector => f.write_str("U"),
        }
    }
}

/// One substitution inside a [`TraceStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub stage: Stage,
    pub input: u8,
    pub output: u8,
}

/// Everything that happened to a single enciphered letter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceStep {
    /// Rotor window after stepping, slowest first.
    pub positions: Vec<u8>,
    pub input: u8,
    pub hops: Vec<Hop>,
    pub output: u8,
}

impl fmt::Display for TraceStep {
    /// `ADU A P:A->A; R2:A->B; ... > X`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ",
            indices_to_string(&self.positions),
            index_to_letter(self.input)
        )?;
        for hop in &self.hops {
            write!(
                f,
                "{}:{}->{}; ",
                hop.stage,
                index_to_letter(hop.input),
                index_to_letter(hop.output)
            )?;
        }
        write!(f, "> {}", index_to_letter(self.output))
    }
}

/// Receiver for per-letter traces.
pub trait TraceSink {
    /// Called once per enciphered letter.
    fn record(&mut self, step: &TraceStep);

    /// When `false` the machine skips building traces entirely.
    fn enabled(&self) -> bool {
        true
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _step: &TraceStep) {}

    fn enabled(&self) -> bool {
        false
    }
}

impl TraceSink for Vec<TraceStep> {
    fn record(&mut self, step: &TraceStep) {
        self.push(step.clone());
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn record(&mut self, step: &TraceStep) {
        (**self).record(step);
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(&TraceStep)> TraceSink for FnSink<F> {
    fn record(&mut self, step: &TraceStep) {
        (self.0)(step);
    }
}
