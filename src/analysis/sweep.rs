//! Logarithmic frequency sweeps of impedance and current magnitude.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::circuit::is_positive_finite;
use crate::error::{ResonanceError, Result};

use super::resonance::impedance_magnitude;

/// Number of sweep points used when the caller does not choose one.
pub const DEFAULT_SWEEP_POINTS: usize = 400;

/// Factor on either side of f0 framed by the default sweep window.
pub const SWEEP_SPAN_FACTOR: f64 = 20.0;

/// Lowest frequency the default sweep window starts at (Hz).
pub const MIN_SWEEP_FREQUENCY: f64 = 1.0;

/// Quantity sampled by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepQuantity {
    /// Impedance magnitude |Z| in ohms
    Impedance,
    /// Current magnitude Vin/|Z| in amperes
    Current,
}

impl SweepQuantity {
    pub fn unit(&self) -> &'static str {
        match self {
            SweepQuantity::Impedance => "Ω",
            SweepQuantity::Current => "A",
        }
    }
}

/// A sampled response curve.
///
/// `frequencies` is strictly increasing and `values[i]` is the response at
/// `frequencies[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepResult {
    pub quantity: SweepQuantity,
    pub frequencies: Vec<f64>,
    pub values: Vec<f64>,
}

impl SweepResult {
    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterate over `(frequency, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies.iter().copied().zip(self.values.iter().copied())
    }

    /// Sample with the largest value (the resonance peak of a current sweep).
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points().fold(None, |best, p| match best {
            Some((_, v)) if v >= p.1 => best,
            _ => Some(p),
        })
    }

    /// Sample with the smallest value (the impedance dip at resonance).
    pub fn trough(&self) -> Option<(f64, f64)> {
        self.points().fold(None, |best, p| match best {
            Some((_, v)) if v <= p.1 => best,
            _ => Some(p),
        })
    }
}

/// Frequency bounds of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepWindow {
    pub f_min: f64,
    pub f_max: f64,
}

impl SweepWindow {
    /// Window used as-is; the sweeper checks it.
    pub fn new(f_min: f64, f_max: f64) -> Self {
        Self { f_min, f_max }
    }

    /// Window framing the resonance peak: [f0/20, f0·20], never starting
    /// below 1 Hz.
    pub fn around(f0: f64) -> Self {
        Self::clamped(
            (f0 / SWEEP_SPAN_FACTOR).max(MIN_SWEEP_FREQUENCY),
            f0 * SWEEP_SPAN_FACTOR,
        )
    }

    /// Repair arbitrary bounds into a usable window.
    ///
    /// A non-finite or non-positive lower bound becomes 1 Hz; an upper bound
    /// that is non-finite or not above the lower one becomes ten times it.
    pub fn clamped(f_min: f64, f_max: f64) -> Self {
        let f_min = if is_positive_finite(f_min) {
            f_min
        } else {
            MIN_SWEEP_FREQUENCY
        };
        let f_max = if f_max.is_finite() && f_max > f_min {
            f_max
        } else {
            f_min * 10.0
        };
        Self { f_min, f_max }
    }

    /// Decades covered by the window.
    pub fn decades(&self) -> f64 {
        (self.f_max / self.f_min).log10()
    }
}

fn check_range(f_min: f64, f_max: f64, n: usize) -> Result<()> {
    if !is_positive_finite(f_min) || !is_positive_finite(f_max) {
        return Err(ResonanceError::range(format!(
            "bounds must be finite and positive (f_min={f_min}, f_max={f_max})"
        )));
    }
    if f_max <= f_min {
        return Err(ResonanceError::range(format!(
            "f_max ({f_max}) must be greater than f_min ({f_min})"
        )));
    }
    if n < 2 {
        return Err(ResonanceError::range(format!(
            "at least 2 points are required, got {n}"
        )));
    }
    Ok(())
}

/// `n` frequencies uniformly spaced in log10 space, both bounds included.
///
/// Requires `0 < f_min < f_max` and `n >= 2`, and the window must be wide
/// enough that every sample is distinct.
pub fn logspace(f_min: f64, f_max: f64, n: usize) -> Result<Vec<f64>> {
    check_range(f_min, f_max, n)?;

    let log_min = f_min.log10();
    let log_max = f_max.log10();
    let last = (n - 1) as f64;
    let mut out: Vec<f64> = (0..n)
        .map(|i| 10f64.powf(log_min + (i as f64 / last) * (log_max - log_min)))
        .collect();

    // Pin the endpoints so the window is reproduced exactly
    out[0] = f_min;
    out[n - 1] = f_max;

    if !out.windows(2).all(|w| w[1] > w[0]) {
        return Err(ResonanceError::range(format!(
            "window [{f_min}, {f_max}] is too narrow for {n} distinct points"
        )));
    }
    Ok(out)
}

/// Sweep impedance magnitude of a series RLC circuit over `[f_min, f_max]`.
///
/// Each point is evaluated independently from R, L and C.
pub fn sweep_magnitude(
    r: f64,
    l: f64,
    c: f64,
    f_min: f64,
    f_max: f64,
    n: usize,
) -> Result<SweepResult> {
    if ![r, l, c].into_iter().all(is_positive_finite) {
        return Err(ResonanceError::range(
            "R, L and C must be finite and positive",
        ));
    }

    let frequencies = logspace(f_min, f_max, n)?;
    let values = frequencies
        .iter()
        .map(|&f| impedance_magnitude(r, l, c, f))
        .collect();

    Ok(SweepResult {
        quantity: SweepQuantity::Impedance,
        frequencies,
        values,
    })
}

/// Sweep current magnitude Vin/|Z| of a series RLC circuit driven by `vin`.
pub fn sweep_current(
    r: f64,
    l: f64,
    c: f64,
    f_min: f64,
    f_max: f64,
    n: usize,
    vin: f64,
) -> Result<SweepResult> {
    if !is_positive_finite(vin) {
        return Err(ResonanceError::range("Vin must be finite and positive"));
    }

    let SweepResult {
        frequencies,
        values,
        ..
    } = sweep_magnitude(r, l, c, f_min, f_max, n)?;

    Ok(SweepResult {
        quantity: SweepQuantity::Current,
        frequencies,
        values: values.into_iter().map(|z| vin / z).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const R: f64 = 100.0;
    const L: f64 = 0.01;
    const C: f64 = 1e-6;

    #[test]
    fn test_logspace_decades() {
        let f = logspace(10.0, 10_000.0, 4).unwrap();
        assert_eq!(f.len(), 4);
        assert_relative_eq!(f[0], 10.0);
        assert_relative_eq!(f[1], 100.0, max_relative = 1e-12);
        assert_relative_eq!(f[2], 1000.0, max_relative = 1e-12);
        assert_relative_eq!(f[3], 10_000.0);
    }

    #[test]
    fn test_logspace_strictly_increasing_with_exact_endpoints() {
        let f = logspace(79.577, 31_830.98, DEFAULT_SWEEP_POINTS).unwrap();
        assert_eq!(f.len(), DEFAULT_SWEEP_POINTS);
        assert_eq!(f[0], 79.577);
        assert_eq!(f[DEFAULT_SWEEP_POINTS - 1], 31_830.98);
        assert!(f.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_logspace_rejects_window_narrower_than_resolution() {
        let f_max = 1000.0 * (1.0 + 1e-14);
        assert!(f_max > 1000.0);
        assert!(logspace(1000.0, f_max, 400).unwrap_err().is_range());
        assert!(sweep_magnitude(R, L, C, 1000.0, f_max, 400).unwrap_err().is_range());

        // Two points only need the bounds to differ
        assert_eq!(logspace(1000.0, f_max, 2).unwrap(), vec![1000.0, f_max]);
    }

    #[test]
    fn test_equal_bounds_rejected() {
        let err = sweep_magnitude(R, L, C, 1000.0, 1000.0, 400).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_inverted_or_non_positive_bounds_rejected() {
        assert!(sweep_magnitude(R, L, C, 2000.0, 1000.0, 400).unwrap_err().is_range());
        assert!(sweep_magnitude(R, L, C, 0.0, 1000.0, 400).unwrap_err().is_range());
        assert!(sweep_magnitude(R, L, C, -10.0, 1000.0, 400).unwrap_err().is_range());
        assert!(sweep_magnitude(R, L, C, 10.0, f64::INFINITY, 400).unwrap_err().is_range());
    }

    #[test]
    fn test_too_few_points_rejected() {
        assert!(sweep_magnitude(R, L, C, 10.0, 1000.0, 1).unwrap_err().is_range());
        assert!(sweep_magnitude(R, L, C, 10.0, 1000.0, 0).unwrap_err().is_range());
        assert_eq!(sweep_magnitude(R, L, C, 10.0, 1000.0, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_non_positive_components_rejected() {
        assert!(sweep_magnitude(0.0, L, C, 10.0, 1000.0, 10).unwrap_err().is_range());
        assert!(sweep_magnitude(R, -L, C, 10.0, 1000.0, 10).unwrap_err().is_range());
        assert!(sweep_current(R, L, C, 10.0, 1000.0, 10, 0.0).unwrap_err().is_range());
    }

    #[test]
    fn test_magnitude_dips_to_r_near_resonance() {
        let f0 = 1591.549_430_918_953;
        let sweep = sweep_magnitude(R, L, C, f0 / 20.0, f0 * 20.0, 401).unwrap();
        assert_eq!(sweep.quantity, SweepQuantity::Impedance);
        assert_eq!(sweep.frequencies.len(), sweep.values.len());

        // The middle sample of a symmetric log window lands on f0
        let (f_min, z_min) = sweep.trough().unwrap();
        assert_relative_eq!(f_min, f0, max_relative = 1e-9);
        assert_relative_eq!(z_min, R, max_relative = 1e-9);
        assert!(sweep.values.iter().all(|&z| z >= R * (1.0 - 1e-12)));
    }

    #[test]
    fn test_current_is_vin_over_impedance() {
        let vin = 2.5;
        let z = sweep_magnitude(R, L, C, 100.0, 10_000.0, 50).unwrap();
        let i = sweep_current(R, L, C, 100.0, 10_000.0, 50, vin).unwrap();

        assert_eq!(i.quantity, SweepQuantity::Current);
        assert_eq!(i.frequencies, z.frequencies);
        for (zi, ii) in z.values.iter().zip(&i.values) {
            assert_relative_eq!(*ii, vin / zi, max_relative = 1e-15);
        }

        // Peak current is bounded by Vin/R
        let (_, peak) = i.peak().unwrap();
        assert!(peak <= vin / R * (1.0 + 1e-12));
    }

    #[test]
    fn test_window_around_resonance() {
        let w = SweepWindow::around(1591.55);
        assert_relative_eq!(w.f_min, 1591.55 / 20.0);
        assert_relative_eq!(w.f_max, 1591.55 * 20.0);
        assert_relative_eq!(w.decades(), 400f64.log10(), max_relative = 1e-12);
    }

    #[test]
    fn test_window_around_low_resonance_clamps_to_one_hertz() {
        let w = SweepWindow::around(5.0);
        assert_eq!(w.f_min, 1.0);
        assert_eq!(w.f_max, 100.0);

        // f0·20 would not clear the 1 Hz floor
        let w = SweepWindow::around(0.01);
        assert_eq!(w.f_min, 1.0);
        assert_eq!(w.f_max, 10.0);
    }

    #[test]
    fn test_window_clamped_repairs_bounds() {
        assert_eq!(SweepWindow::clamped(-3.0, 500.0), SweepWindow::new(1.0, 500.0));
        assert_eq!(SweepWindow::clamped(f64::NAN, 0.5), SweepWindow::new(1.0, 10.0));
        assert_eq!(SweepWindow::clamped(200.0, 100.0), SweepWindow::new(200.0, 2000.0));
        assert_eq!(SweepWindow::clamped(10.0, 1e5), SweepWindow::new(10.0, 1e5));
    }
}
