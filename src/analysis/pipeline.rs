//! Full analysis pipeline: validate, compute, sweep, band edges.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::circuit::{validate, CircuitParameters, RawParameters};
use crate::error::{ResonanceError, Result};
use crate::report::QualityClass;

use super::{
    compute, half_power_edges, sweep_current, sweep_magnitude, BandEdges, ResonanceResult,
    SweepResult, SweepWindow, DEFAULT_SWEEP_POINTS,
};

/// Which response curve the pipeline sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepMode {
    /// Impedance magnitude |Z|(f)
    #[default]
    Impedance,
    /// Current magnitude Vin/|Z|(f)
    Current,
}

impl FromStr for SweepMode {
    type Err = ResonanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "z" | "impedance" => Ok(SweepMode::Impedance),
            "i" | "current" => Ok(SweepMode::Current),
            other => Err(ResonanceError::validation(
                "mode",
                format!("unknown sweep mode '{other}' (expected 'z' or 'i')"),
            )),
        }
    }
}

impl fmt::Display for SweepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepMode::Impedance => write!(f, "z"),
            SweepMode::Current => write!(f, "i"),
        }
    }
}

/// Options for [`analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Curve to sweep.
    pub mode: SweepMode,
    /// Number of sweep points.
    pub points: usize,
    /// Sweep bounds; `None` frames the resonance peak.
    pub window: Option<SweepWindow>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            mode: SweepMode::default(),
            points: DEFAULT_SWEEP_POINTS,
            window: None,
        }
    }
}

impl AnalysisOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the swept curve.
    pub fn with_mode(mut self, mode: SweepMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the number of sweep points.
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Sweep over explicit bounds instead of the window around f0.
    pub fn with_window(mut self, window: SweepWindow) -> Self {
        self.window = Some(window);
        self
    }
}

/// Everything derived from one parameter set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Analysis {
    pub parameters: CircuitParameters,
    pub resonance: ResonanceResult,
    pub quality_class: QualityClass,
    pub window: SweepWindow,
    pub sweep: SweepResult,
    pub edges: BandEdges,
}

impl Analysis {
    /// Run the pipeline on already validated parameters.
    pub fn from_parameters(parameters: CircuitParameters, options: &AnalysisOptions) -> Result<Self> {
        let _span = tracing::info_span!("rlc_analysis", mode = %options.mode, points = options.points)
            .entered();

        let (r, l, c) = (parameters.r(), parameters.l(), parameters.c());
        let resonance = compute(r, l, c, parameters.f())?;
        tracing::debug!(
            f0 = resonance.f0,
            q = resonance.q,
            z = resonance.z,
            "resonance computed"
        );

        let window = options
            .window
            .unwrap_or_else(|| SweepWindow::around(resonance.f0));
        let sweep = match options.mode {
            SweepMode::Impedance => {
                sweep_magnitude(r, l, c, window.f_min, window.f_max, options.points)?
            }
            SweepMode::Current => sweep_current(
                r,
                l,
                c,
                window.f_min,
                window.f_max,
                options.points,
                parameters.vin(),
            )?,
        };
        tracing::debug!(
            f_min = window.f_min,
            f_max = window.f_max,
            points = sweep.len(),
            "sweep complete"
        );

        let edges = half_power_edges(resonance.q, resonance.f0)?;

        Ok(Self {
            parameters,
            quality_class: QualityClass::from_q(resonance.q),
            resonance,
            window,
            sweep,
            edges,
        })
    }
}

/// Validate a raw input bundle and run the full analysis.
pub fn analyze(raw: &RawParameters, options: &AnalysisOptions) -> Result<Analysis> {
    let parameters = validate(raw).inspect_err(|e| {
        tracing::debug!(error = %e, "input rejected");
    })?;
    Analysis::from_parameters(parameters, options)
}
