//! rotorcrypt CLI - rotor cipher machine simulator
//!
//! Prints the input line followed by the enciphered line.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use rotorcrypt::{
    FnSink, Machine, MachineConfig, ReflectorModel, RotorModel, SteppingPolicy, TraceStep,
};

/// Enigma-style rotor cipher machine.
///
/// Enciphering and deciphering are the same operation: run the ciphertext
/// through a machine set to the same key to recover the plaintext.
#[derive(Parser, Debug)]
#[command(name = "rotorcrypt")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  rotorcrypt -s OKW ENIGMA")]
struct Cli {
    /// Initial rotor positions (Grundstellung), slowest rotor first
    #[arg(short, long, default_value = "AAA")]
    setting: String,

    /// Ring settings (Ringstellung), slowest rotor first
    #[arg(short, long, alias = "ring", default_value = "AAA")]
    rings: String,

    /// Plugboard pairs, e.g. -p "AV BS CG" or -p AV -p BS
    #[arg(short, long)]
    plugboard: Vec<String>,

    /// Rotor order, slowest first
    #[arg(long, num_args = 3, value_names = ["LEFT", "MIDDLE", "RIGHT"], default_values = ["III", "II", "I"])]
    rotors: Vec<RotorModel>,

    /// Reflector (A, B or C)
    #[arg(long, default_value = "B")]
    reflector: ReflectorModel,

    /// Stepping behaviour (double-step or cascade)
    #[arg(long, default_value = "double-step")]
    stepping: SteppingPolicy,

    /// Print rotor positions and every substitution stage per letter
    #[arg(short, long)]
    verbose: bool,

    /// List the available rotors and reflectors and exit
    #[arg(long)]
    list: bool,

    /// Text to encipher; read from stdin when omitted
    text: Vec<String>,
}

impl Cli {
    fn machine_config(&self) -> Result<MachineConfig> {
        let rotors: [RotorModel; 3] = self
            .rotors
            .clone()
            .try_into()
            .map_err(|r: Vec<RotorModel>| rotorcrypt::ConfigurationError::RotorCount(r.len()))?;
        let config = MachineConfig::new()
            .with_rotors(rotors)
            .with_reflector(self.reflector)
            .with_positions(&self.setting.to_ascii_uppercase())
            .with_rings(&self.rings.to_ascii_uppercase())
            .with_plugboard(&self.plugboard)
            .with_stepping(self.stepping);
        config.validate()?;
        Ok(config)
    }
}

fn list_models(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Rotors:")?;
    for model in RotorModel::ALL {
        writeln!(
            out,
            "  {:<5} {}  notch {}",
            model.name(),
            model.wiring(),
            model.notches()
        )?;
    }
    writeln!(out, "Reflectors:")?;
    for model in ReflectorModel::ALL {
        writeln!(out, "  {:<5} {}", model.name(), model.wiring())?;
    }
    Ok(())
}

fn process_line(machine: &mut Machine, line: &str, verbose: bool, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", line)?;
    let result = if verbose {
        let mut trace_lines = Vec::new();
        let result = machine.encode_traced(
            line,
            FnSink(|step: &TraceStep| trace_lines.push(step.to_string())),
        );
        for trace_line in trace_lines {
            writeln!(out, "{}", trace_line)?;
        }
        result
    } else {
        machine.encode(line)
    };
    writeln!(out, "{}", result)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        list_models(&mut out)?;
        return Ok(());
    }

    let config = cli.machine_config().context("invalid machine configuration")?;
    let mut machine = Machine::new(&config)?;

    if cli.text.is_empty() {
        debug!("reading message from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            process_line(&mut machine, &line, cli.verbose, &mut out)?;
        }
    } else {
        let text = cli.text.join(" ");
        process_line(&mut machine, &text, cli.verbose, &mut out)?;
    }
    Ok(())
}
