//! Half-power (-3 dB) band edges of a series RLC resonance.
//!
//! For a series RLC bandpass the half-power angular frequencies are
//!
//! ```text
//! ω1,2 = ω0 · ( √(1 + 1/(4Q²)) ∓ 1/(2Q) )
//! ```
//!
//! which holds for every Q > 0, including overdamped circuits where the
//! small-bandwidth approximation f0 ± BW/2 goes negative.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::circuit::is_positive_finite;
use crate::error::{ResonanceError, Result};

/// Lower and upper half-power frequencies (Hz), `0 < f1 < f2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BandEdges {
    pub f1: f64,
    pub f2: f64,
}

impl BandEdges {
    /// Bandwidth f2 - f1 (equals f0/Q).
    pub fn width(&self) -> f64 {
        self.f2 - self.f1
    }

    /// Geometric centre √(f1·f2) (equals f0).
    pub fn center(&self) -> f64 {
        (self.f1 * self.f2).sqrt()
    }

    /// Whether `f` lies inside the half-power band.
    pub fn contains(&self, f: f64) -> bool {
        f >= self.f1 && f <= self.f2
    }
}

/// Half-power band edges from quality factor `q` and resonant frequency `f0`.
pub fn half_power_edges(q: f64, f0: f64) -> Result<BandEdges> {
    if !is_positive_finite(q) || !is_positive_finite(f0) {
        return Err(ResonanceError::computation(format!(
            "Q and f0 must be finite and positive (Q={q}, f0={f0})"
        )));
    }

    // The 2π factors cancel between ω and f
    let half_inv_q = 1.0 / (2.0 * q);
    let upper = 1f64.hypot(half_inv_q) + half_inv_q;
    // (√(1+h²) - h)(√(1+h²) + h) = 1, so f1 = f0/upper avoids cancellation at low Q
    let f1 = f0 / upper;
    let f2 = f0 * upper;

    if !f1.is_finite() || !f2.is_finite() || f1 <= 0.0 || f2 <= f1 {
        return Err(ResonanceError::computation(format!(
            "degenerate band edges (f1={f1:e}, f2={f2:e})"
        )));
    }

    Ok(BandEdges { f1, f2 })
}
