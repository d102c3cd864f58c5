//! Resonance - series RLC calculator
//!
//! Computes resonance figures for a series RLC circuit and sweeps its
//! impedance or current response.
//!
//! # Usage
//!
//! ```bash
//! resonance --r 100 --l 10m --c 1u --f 1k
//! resonance --r 100 --l 10m --c 1u --f 1k --mode i --vin 5 --csv
//! RUST_LOG=debug resonance --r 47 --l 2.2m --c 4.7n --f 30k --json
//! ```

use std::io::{self, Write};

use clap::Parser;
use resonance_core::{
    analysis::{
        Analysis, AnalysisOptions, SweepMode, SweepQuantity, SweepWindow, DEFAULT_SWEEP_POINTS,
    },
    circuit::RawParameters,
    error::Result,
};

/// Series RLC resonance calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resistance in ohms (SI suffixes allowed: 4.7k)
    #[arg(long = "r", value_name = "OHMS", default_value = "100")]
    r: String,

    /// Inductance in henries (10m = 10 mH)
    #[arg(long = "l", value_name = "HENRIES", default_value = "0.01")]
    l: String,

    /// Capacitance in farads (1u = 1 µF)
    #[arg(long = "c", value_name = "FARADS", default_value = "0.000001")]
    c: String,

    /// Operating frequency in hertz
    #[arg(long = "f", value_name = "HZ", default_value = "1000")]
    f: String,

    /// Source amplitude in volts (used by the current sweep)
    #[arg(long, value_name = "VOLTS", default_value = "1.0")]
    vin: String,

    /// Swept curve: 'z' for impedance, 'i' for current
    #[arg(short, long, default_value_t = SweepMode::Impedance)]
    mode: SweepMode,

    /// Number of sweep points
    #[arg(short, long, default_value_t = DEFAULT_SWEEP_POINTS)]
    points: usize,

    /// Lower sweep bound in hertz (defaults to f0/20)
    #[arg(long, requires = "f_max")]
    f_min: Option<f64>,

    /// Upper sweep bound in hertz (defaults to f0*20)
    #[arg(long, requires = "f_min")]
    f_max: Option<f64>,

    /// Print the full analysis as JSON
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Print the sweep as CSV (frequency,value)
    #[arg(long)]
    csv: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let raw = RawParameters::new(&args.r, &args.l, &args.c, &args.f, &args.vin);

    let mut options = AnalysisOptions::new()
        .with_mode(args.mode)
        .with_points(args.points);
    if let (Some(f_min), Some(f_max)) = (args.f_min, args.f_max) {
        options = options.with_window(SweepWindow::clamped(f_min, f_max));
    }

    let analysis = resonance_core::analyze(&raw, &options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &analysis)?;
        writeln!(out)?;
    } else if args.csv {
        write_csv(&mut out, &analysis)?;
    } else {
        writeln!(out, "{analysis}")?;
    }
    out.flush()?;

    Ok(())
}

fn write_csv(out: &mut impl Write, analysis: &Analysis) -> Result<()> {
    let header = match analysis.sweep.quantity {
        SweepQuantity::Impedance => "frequency_hz,impedance_ohm",
        SweepQuantity::Current => "frequency_hz,current_a",
    };
    writeln!(out, "{header}")?;
    for (f, v) in analysis.sweep.points() {
        writeln!(out, "{f},{v}")?;
    }
    Ok(())
}
