//! # Resonance Core
//!
//! Steady-state AC analysis of a series RLC circuit.
//!
//! This library provides:
//! - Validation of raw R, L, C, f, Vin input (plain numbers or SI suffixes)
//! - Closed-form reactances, impedance, resonant frequency, Q, bandwidth and
//!   damping ratio
//! - Logarithmic frequency sweeps of impedance or current magnitude
//! - Exact half-power band edges for any Q
//!
//! ## Architecture
//!
//! - [`circuit`] - Parameter types, value parsing and validation
//! - [`analysis`] - The numerical engine and the full analysis pipeline
//! - [`report`] - Q classification and text formatting
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! resonance --r 100 --l 10m --c 1u --f 1k
//! resonance --r 100 --l 10m --c 1u --f 1k --mode i --csv > sweep.csv
//! ```
//!
//! ### Library
//!
//! ```
//! use resonance_core::{analyze, AnalysisOptions, RawParameters};
//!
//! let raw = RawParameters::new("100", "10m", "1u", "1k", "1");
//! let analysis = analyze(&raw, &AnalysisOptions::new()).unwrap();
//! assert!((analysis.resonance.q - 1.0).abs() < 1e-9);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmResonance } from 'resonance_core';
//!
//! const rlc = new WasmResonance("100", "0.01", "0.000001", "1000", "1.0");
//! console.log(rlc.f0, rlc.q, rlc.band_edges());
//! ```

pub mod analysis;
pub mod circuit;
pub mod error;
pub mod report;

// Re-export main types for convenience
pub use analysis::{
    analyze, compute, half_power_edges, sweep_current, sweep_magnitude, Analysis,
    AnalysisOptions, BandEdges, ResonanceResult, SweepMode, SweepResult, SweepWindow,
};
pub use circuit::{validate, CircuitParameters, RawParameters};
pub use error::{ResonanceError, Result};
pub use report::QualityClass;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmResonance;
