//! Human-readable reporting of analysis results.
//!
//! [`QualityClass`] buckets the quality factor into the four regimes shown to
//! users, and [`format_eng`] renders numbers the way the text report prints
//! them. [`Analysis`] implements [`Display`](fmt::Display) as that report.

mod format;
mod quality;

pub use format::format_eng;
pub use quality::{QualityClass, BROAD_MAX_Q, MODERATE_MAX_Q, OVERDAMPED_MAX_Q};

use std::fmt;

use crate::analysis::{Analysis, SweepQuantity};
use crate::circuit::Field;

/// Decimals used by the text report.
pub const REPORT_DIGITS: usize = 3;

fn eng(x: f64) -> String {
    format_eng(x, REPORT_DIGITS)
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Series RLC")?;
        for field in Field::ALL {
            write!(
                f,
                " {}={} {}",
                field,
                eng(self.parameters.get(field)),
                field.unit()
            )?;
        }
        writeln!(f)?;
        writeln!(f)?;

        let res = &self.resonance;
        writeln!(f, "  f0   {} Hz", eng(res.f0))?;
        writeln!(f, "  XL   {} Ω", eng(res.xl))?;
        writeln!(f, "  XC   {} Ω", eng(res.xc))?;
        writeln!(f, "  |Z|  {} Ω", eng(res.z))?;
        writeln!(f, "  Q    {}", eng(res.q))?;
        writeln!(f, "  BW   {} Hz", eng(res.bw))?;
        writeln!(f, "  ζ    {}", eng(res.zeta))?;
        writeln!(f)?;

        let class = self.quality_class;
        writeln!(f, "Q class: {} ({})", class, class.summary())?;
        for pro in class.pros() {
            writeln!(f, "  + {pro}")?;
        }
        for con in class.cons() {
            writeln!(f, "  - {con}")?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Half-power band: f1={} Hz ~ f2={} Hz",
            eng(self.edges.f1),
            eng(self.edges.f2)
        )?;

        let curve = match self.sweep.quantity {
            SweepQuantity::Impedance => "|Z|",
            SweepQuantity::Current => "|I|",
        };
        write!(
            f,
            "Sweep: {} points of {} ({}) from {} Hz to {} Hz",
            self.sweep.len(),
            curve,
            self.sweep.quantity.unit(),
            eng(self.window.f_min),
            eng(self.window.f_max)
        )
    }
}
