//! Numerical engine for series RLC resonance.
//!
//! ## Series RLC response
//!
//! With ω = 2πf the circuit presents
//!
//! ```text
//! XL = ωL          XC = 1/(ωC)
//! |Z| = √(R² + (XL - XC)²)
//! f0 = 1 / (2π√(LC))     Q = (1/R)·√(L/C)
//! BW = f0/Q              ζ = 1/(2Q)
//! ```
//!
//! The module is split into:
//! - [`compute`] - closed-form figures at a single frequency
//! - [`sweep_magnitude`] / [`sweep_current`] - log-spaced response curves
//! - [`half_power_edges`] - exact -3 dB band edges from Q and f0
//! - [`analyze`] - the full pipeline from raw input to a single [`Analysis`]
//!
//! Every function here is pure; only [`analyze`] emits tracing events.

mod bandwidth;
mod pipeline;
mod resonance;
mod sweep;

pub use bandwidth::{half_power_edges, BandEdges};
pub use pipeline::{analyze, Analysis, AnalysisOptions, SweepMode};
pub use resonance::{angular_frequency, compute, impedance_magnitude, ResonanceResult};
pub use sweep::{
    logspace, sweep_current, sweep_magnitude, SweepQuantity, SweepResult, SweepWindow,
    DEFAULT_SWEEP_POINTS, MIN_SWEEP_FREQUENCY, SWEEP_SPAN_FACTOR,
};
