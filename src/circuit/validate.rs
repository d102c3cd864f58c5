//! Input validation.
//!
//! All formulas downstream assume strictly positive, finite inputs. This is
//! the single place those assumptions are checked for user input; the
//! formulas reuse [`is_positive_finite`] for their own domain checks.

use crate::error::{ResonanceError, Result};

use super::value::parse_value;
use super::{CircuitParameters, Field, RawParameters};

/// `true` if `value` is finite and strictly greater than zero.
#[inline]
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Check a single numeric field, naming it in the error.
pub fn require_positive(field: &str, value: f64) -> Result<f64> {
    if value.is_nan() {
        return Err(ResonanceError::validation(field, "enter a number"));
    }
    if !value.is_finite() {
        return Err(ResonanceError::validation(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ResonanceError::validation(
            field,
            "must be a positive real number",
        ));
    }
    Ok(value)
}

/// Parse and check a raw parameter bundle.
///
/// Fields are checked in the order R, L, C, f, Vin; the first failing field
/// is reported.
pub fn validate(raw: &RawParameters) -> Result<CircuitParameters> {
    let mut values = [0.0; 5];
    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        let text = raw.get(field);
        if text.trim().is_empty() {
            return Err(ResonanceError::validation(field.name(), "value is required"));
        }
        let value = parse_value(text)
            .ok_or_else(|| ResonanceError::validation(field.name(), "enter a number"))?;
        *slot = require_positive(field.name(), value)?;
    }

    let [r, l, c, f, vin] = values;
    Ok(CircuitParameters { r, l, c, f, vin })
}

impl CircuitParameters {
    /// Create a parameter set from numeric values, checking each one.
    pub fn new(r: f64, l: f64, c: f64, f: f64, vin: f64) -> Result<Self> {
        Ok(Self {
            r: require_positive(Field::Resistance.name(), r)?,
            l: require_positive(Field::Inductance.name(), l)?,
            c: require_positive(Field::Capacitance.name(), c)?,
            f: require_positive(Field::Frequency.name(), f)?,
            vin: require_positive(Field::SourceVoltage.name(), vin)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(r: &str, l: &str, c: &str, f: &str, vin: &str) -> RawParameters {
        RawParameters::new(r, l, c, f, vin)
    }

    #[test]
    fn test_valid_bundle() {
        let params = validate(&raw("100", "0.01", "0.000001", "1000", "1.0")).unwrap();
        assert_eq!(params.r(), 100.0);
        assert_eq!(params.l(), 0.01);
        assert_eq!(params.c(), 1e-6);
        assert_eq!(params.f(), 1000.0);
        assert_eq!(params.vin(), 1.0);
    }

    #[test]
    fn test_si_suffixes_accepted() {
        let params = validate(&raw("100", "10m", "1u", "1k", "1")).unwrap();
        assert!((params.l() - 0.01).abs() < 1e-15);
        assert!((params.c() - 1e-6).abs() < 1e-18);
        assert!((params.f() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_resistance_names_r() {
        let err = validate(&raw("0", "0.01", "1e-6", "1000", "1")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("R"));
    }

    #[test]
    fn test_negative_frequency_names_f() {
        let err = validate(&raw("100", "0.01", "1e-6", "-5", "1")).unwrap_err();
        assert_eq!(err.field(), Some("f"));
    }

    #[test]
    fn test_non_numeric_and_missing() {
        let err = validate(&raw("100", "abc", "1e-6", "1000", "1")).unwrap_err();
        assert_eq!(err.field(), Some("L"));

        let err = validate(&raw("100", "0.01", "", "1000", "1")).unwrap_err();
        assert_eq!(err.field(), Some("C"));

        let err = validate(&raw("100", "0.01", "1e-6", "1000", "NaN")).unwrap_err();
        assert_eq!(err.field(), Some("Vin"));

        let err = validate(&raw("100", "0.01", "1e-6", "inf", "1")).unwrap_err();
        assert_eq!(err.field(), Some("f"));
    }

    #[test]
    fn test_first_failing_field_reported() {
        let err = validate(&raw("-1", "-1", "-1", "-1", "-1")).unwrap_err();
        assert_eq!(err.field(), Some("R"));
    }

    #[test]
    fn test_numeric_constructor() {
        assert!(CircuitParameters::new(100.0, 0.01, 1e-6, 1000.0, 1.0).is_ok());

        let err = CircuitParameters::new(100.0, 0.01, 1e-6, 1000.0, 0.0).unwrap_err();
        assert_eq!(err.field(), Some("Vin"));

        let err = CircuitParameters::new(f64::NAN, 0.01, 1e-6, 1000.0, 1.0).unwrap_err();
        assert_eq!(err.field(), Some("R"));

        let err = CircuitParameters::new(100.0, f64::INFINITY, 1e-6, 1000.0, 1.0).unwrap_err();
        assert_eq!(err.field(), Some("L"));
    }
}
