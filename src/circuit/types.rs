//! Core types for the series RLC parameter set.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the five named inputs of a series RLC calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Series resistance (Ω)
    Resistance,
    /// Series inductance (H)
    Inductance,
    /// Series capacitance (F)
    Capacitance,
    /// Operating frequency (Hz)
    Frequency,
    /// Source amplitude (V)
    SourceVoltage,
}

impl Field {
    /// All fields, in validation order.
    pub const ALL: [Field; 5] = [
        Field::Resistance,
        Field::Inductance,
        Field::Capacitance,
        Field::Frequency,
        Field::SourceVoltage,
    ];

    /// The short name the field is reported under.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Resistance => "R",
            Field::Inductance => "L",
            Field::Capacitance => "C",
            Field::Frequency => "f",
            Field::SourceVoltage => "Vin",
        }
    }

    /// SI unit symbol.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::Resistance => "Ω",
            Field::Inductance => "H",
            Field::Capacitance => "F",
            Field::Frequency => "Hz",
            Field::SourceVoltage => "V",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Untyped parameter bundle as it arrives from a form or API payload.
///
/// Each value is kept as text; [`validate`](super::validate) parses and
/// checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawParameters {
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    pub r: String,
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub l: String,
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    pub c: String,
    pub f: String,
    #[cfg_attr(feature = "serde", serde(rename = "Vin"))]
    pub vin: String,
}

impl RawParameters {
    /// Build a bundle from anything that renders as text.
    pub fn new(
        r: impl ToString,
        l: impl ToString,
        c: impl ToString,
        f: impl ToString,
        vin: impl ToString,
    ) -> Self {
        Self {
            r: r.to_string(),
            l: l.to_string(),
            c: c.to_string(),
            f: f.to_string(),
            vin: vin.to_string(),
        }
    }

    /// Raw text of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Resistance => &self.r,
            Field::Inductance => &self.l,
            Field::Capacitance => &self.c,
            Field::Frequency => &self.f,
            Field::SourceVoltage => &self.vin,
        }
    }
}

/// Validated series RLC parameters.
///
/// Every field is finite and strictly positive. Instances only come out of
/// [`CircuitParameters::new`] or [`validate`](super::validate), so the fields
/// are read through accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CircuitParameters {
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    pub(super) r: f64,
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub(super) l: f64,
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    pub(super) c: f64,
    pub(super) f: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Vin"))]
    pub(super) vin: f64,
}

impl CircuitParameters {
    /// Resistance in ohms.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Inductance in henries.
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Capacitance in farads.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Operating frequency in hertz.
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Source amplitude in volts.
    pub fn vin(&self) -> f64 {
        self.vin
    }

    /// Value of one field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Resistance => self.r,
            Field::Inductance => self.l,
            Field::Capacitance => self.c,
            Field::Frequency => self.f,
            Field::SourceVoltage => self.vin,
        }
    }
}
