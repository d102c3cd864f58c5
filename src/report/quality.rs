//! Qualitative classification of the quality factor.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper Q bound of [`QualityClass::Overdamped`].
pub const OVERDAMPED_MAX_Q: f64 = 0.5;
/// Upper Q bound of [`QualityClass::Broad`].
pub const BROAD_MAX_Q: f64 = 2.0;
/// Upper Q bound of [`QualityClass::Moderate`].
pub const MODERATE_MAX_Q: f64 = 10.0;

/// How pronounced the resonance peak is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QualityClass {
    /// Q < 0.5
    Overdamped,
    /// 0.5 <= Q < 2
    Broad,
    /// 2 <= Q < 10
    Moderate,
    /// Q >= 10
    Sharp,
}

impl QualityClass {
    /// Classify a quality factor.
    pub fn from_q(q: f64) -> Self {
        if q < OVERDAMPED_MAX_Q {
            QualityClass::Overdamped
        } else if q < BROAD_MAX_Q {
            QualityClass::Broad
        } else if q < MODERATE_MAX_Q {
            QualityClass::Moderate
        } else {
            QualityClass::Sharp
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityClass::Overdamped => "Overdamped",
            QualityClass::Broad => "Broad",
            QualityClass::Moderate => "Moderate",
            QualityClass::Sharp => "Sharp",
        }
    }

    /// One-line description of the resonance curve.
    pub fn summary(&self) -> &'static str {
        match self {
            QualityClass::Overdamped => "resonance is barely visible",
            QualityClass::Broad => "gentle resonance curve",
            QualityClass::Moderate => "fairly distinct resonance",
            QualityClass::Sharp => "very sharp resonance",
        }
    }

    pub fn pros(&self) -> &'static [&'static str] {
        match self {
            QualityClass::Overdamped => &[
                "transient response settles quickly",
                "little ringing",
            ],
            QualityClass::Broad => &[
                "fairly flat response over a wide band",
                "low sensitivity to component values",
            ],
            QualityClass::Moderate => &[
                "balance between selectivity and stability",
                "suits most general-purpose uses",
            ],
            QualityClass::Sharp => &[
                "very high selectivity and resolution",
                "well suited to precise measurement and filtering",
            ],
        }
    }

    pub fn cons(&self) -> &'static [&'static str] {
        match self {
            QualityClass::Overdamped => &[
                "very low selectivity makes a poor filter",
                "peaks are hard to resolve",
            ],
            QualityClass::Broad => &["weak resonance peak", "low selectivity and resolution"],
            QualityClass::Moderate => {
                &["may fall short for high-resolution filters or precision sensing"]
            }
            QualityClass::Sharp => &[
                "long ringing stretches the transient response",
                "sensitive to component tolerance and loss",
            ],
        }
    }
}

impl fmt::Display for QualityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
