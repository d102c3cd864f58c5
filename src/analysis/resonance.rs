//! Closed-form steady-state quantities of a series RLC circuit.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::circuit::{is_positive_finite, CircuitParameters};
use crate::error::{ResonanceError, Result};

/// Steady-state response of a series RLC circuit at one frequency, together
/// with the frequency-independent resonance figures.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResonanceResult {
    /// Inductive reactance ωL (Ω)
    pub xl: f64,
    /// Capacitive reactance 1/(ωC) (Ω)
    pub xc: f64,
    /// Impedance magnitude (Ω)
    pub z: f64,
    /// Resonant frequency (Hz)
    pub f0: f64,
    /// Quality factor
    pub q: f64,
    /// -3 dB bandwidth f0/Q (Hz)
    pub bw: f64,
    /// Damping ratio 1/(2Q)
    pub zeta: f64,
}

impl ResonanceResult {
    /// Net reactance XL - XC. Positive above resonance (inductive).
    pub fn net_reactance(&self) -> f64 {
        self.xl - self.xc
    }
}

/// Angular frequency ω = 2πf.
#[inline]
pub fn angular_frequency(f: f64) -> f64 {
    2.0 * PI * f
}

/// Impedance magnitude |Z| = √(R² + (ωL - 1/(ωC))²) at frequency `f`.
#[inline]
pub fn impedance_magnitude(r: f64, l: f64, c: f64, f: f64) -> f64 {
    let w = angular_frequency(f);
    let xl = w * l;
    let xc = 1.0 / (w * c);
    r.hypot(xl - xc)
}

/// Compute reactances, impedance and resonance figures.
///
/// Inputs are expected to have passed [`validate`](crate::circuit::validate);
/// anything outside the positive finite domain, or a combination extreme
/// enough to overflow, yields [`ResonanceError::Computation`].
pub fn compute(r: f64, l: f64, c: f64, f: f64) -> Result<ResonanceResult> {
    if ![r, l, c, f].into_iter().all(is_positive_finite) {
        return Err(ResonanceError::computation(
            "R, L, C and f must be finite and positive",
        ));
    }

    let w = angular_frequency(f);
    let xl = w * l;
    let xc = 1.0 / (w * c);
    let z = r.hypot(xl - xc);
    let f0 = 1.0 / (2.0 * PI * (l * c).sqrt());
    let q = (1.0 / r) * (l / c).sqrt();
    let bw = f0 / q;
    let zeta = 1.0 / (2.0 * q);

    if !z.is_finite() || !f0.is_finite() || !q.is_finite() || q <= 0.0 {
        return Err(ResonanceError::computation(format!(
            "non-finite or out-of-domain result (Z={z:e}, f0={f0:e}, Q={q:e})"
        )));
    }

    Ok(ResonanceResult {
        xl,
        xc,
        z,
        f0,
        q,
        bw,
        zeta,
    })
}

impl CircuitParameters {
    /// Resonance figures for these parameters at their operating frequency.
    pub fn resonance(&self) -> Result<ResonanceResult> {
        compute(self.r(), self.l(), self.c(), self.f())
    }
}
