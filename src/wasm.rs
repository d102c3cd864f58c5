//! WASM bindings for Resonance Core.
//!
//! This module provides JavaScript-friendly bindings so a web page can run
//! the calculator directly on form input.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmResonance } from 'resonance_core';
//!
//! await init();
//!
//! // Values straight from <input> elements; SI suffixes allowed
//! const rlc = new WasmResonance(rInput.value, lInput.value, cInput.value,
//!                               fInput.value, vinInput.value);
//!
//! console.log(rlc.f0, rlc.q, rlc.quality_class);
//! const [f1, f2] = rlc.band_edges();
//! const freqs = rlc.sweep_frequencies(400);
//! const mags = rlc.sweep_values("z", 400);
//! ```

use wasm_bindgen::prelude::*;

use crate::analysis::{
    half_power_edges, sweep_current, sweep_magnitude, ResonanceResult, SweepMode, SweepResult,
    SweepWindow,
};
use crate::circuit::{validate, CircuitParameters, RawParameters};
use crate::error::ResonanceError;
use crate::report::QualityClass;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: ResonanceError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible series RLC calculator.
///
/// Holds one validated parameter set and its resonance figures; sweeps are
/// computed on demand over the window around f0.
#[wasm_bindgen]
pub struct WasmResonance {
    parameters: CircuitParameters,
    result: ResonanceResult,
}

#[wasm_bindgen]
impl WasmResonance {
    /// Validate raw form values and compute the resonance figures.
    ///
    /// # Returns
    /// A new `WasmResonance` or an error string naming the offending field.
    #[wasm_bindgen(constructor)]
    pub fn new(r: &str, l: &str, c: &str, f: &str, vin: &str) -> Result<WasmResonance, JsValue> {
        let parameters = validate(&RawParameters::new(r, l, c, f, vin)).map_err(to_js)?;
        let result = parameters.resonance().map_err(to_js)?;
        Ok(WasmResonance { parameters, result })
    }

    #[wasm_bindgen(getter)]
    pub fn xl(&self) -> f64 {
        self.result.xl
    }

    #[wasm_bindgen(getter)]
    pub fn xc(&self) -> f64 {
        self.result.xc
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.result.z
    }

    #[wasm_bindgen(getter)]
    pub fn f0(&self) -> f64 {
        self.result.f0
    }

    #[wasm_bindgen(getter)]
    pub fn q(&self) -> f64 {
        self.result.q
    }

    #[wasm_bindgen(getter)]
    pub fn bw(&self) -> f64 {
        self.result.bw
    }

    #[wasm_bindgen(getter)]
    pub fn zeta(&self) -> f64 {
        self.result.zeta
    }

    /// Label of the Q regime ("Overdamped", "Broad", "Moderate", "Sharp").
    #[wasm_bindgen(getter)]
    pub fn quality_class(&self) -> String {
        QualityClass::from_q(self.result.q).label().to_string()
    }

    /// Half-power frequencies as `[f1, f2]`.
    #[wasm_bindgen]
    pub fn band_edges(&self) -> Result<Vec<f64>, JsValue> {
        let edges = half_power_edges(self.result.q, self.result.f0).map_err(to_js)?;
        Ok(vec![edges.f1, edges.f2])
    }

    /// Sweep frequencies (Hz) over the window around f0.
    #[wasm_bindgen]
    pub fn sweep_frequencies(&self, points: usize) -> Result<Vec<f64>, JsValue> {
        Ok(self.sweep(SweepMode::Impedance, points)?.frequencies)
    }

    /// Sweep values for `mode` ("z" for |Z| in ohms, "i" for current in amperes).
    #[wasm_bindgen]
    pub fn sweep_values(&self, mode: &str, points: usize) -> Result<Vec<f64>, JsValue> {
        let mode: SweepMode = mode.parse().map_err(to_js)?;
        Ok(self.sweep(mode, points)?.values)
    }
}

impl WasmResonance {
    fn sweep(&self, mode: SweepMode, points: usize) -> Result<SweepResult, JsValue> {
        let p = &self.parameters;
        let window = SweepWindow::around(self.result.f0);
        match mode {
            SweepMode::Impedance => {
                sweep_magnitude(p.r(), p.l(), p.c(), window.f_min, window.f_max, points)
            }
            SweepMode::Current => sweep_current(
                p.r(),
                p.l(),
                p.c(),
                window.f_min,
                window.f_max,
                points,
                p.vin(),
            ),
        }
        .map_err(to_js)
    }
}

/// Classify a quality factor without building a calculator.
#[wasm_bindgen]
pub fn quality_class(q: f64) -> String {
    QualityClass::from_q(q).label().to_string()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default number of sweep points.
#[wasm_bindgen]
pub fn default_sweep_points() -> usize {
    crate::analysis::DEFAULT_SWEEP_POINTS
}
