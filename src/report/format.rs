//! Number formatting for text output.

/// Largest number of decimals honoured; f64 carries no more.
pub const MAX_DIGITS: usize = 17;

/// Format `x` for display with `digits` decimals.
///
/// Values with magnitude in `[0.01, 1000)` print in fixed notation, everything
/// else as a mantissa times a power of ten with a superscript exponent
/// (`1.592×10³`). Trailing zeros are dropped; non-finite values print as `-`.
/// `digits` is capped at [`MAX_DIGITS`].
pub fn format_eng(x: f64, digits: usize) -> String {
    let digits = digits.min(MAX_DIGITS);
    if !x.is_finite() {
        return "-".to_string();
    }
    let ax = x.abs();
    if ax == 0.0 {
        return "0".to_string();
    }

    if ax >= 1000.0 || ax < 0.01 {
        let mut exp = ax.log10().floor() as i32;
        let scale = 10f64.powi(digits as i32);
        let mut mant = mantissa(x, exp);
        if !mant.is_finite() {
            return "-".to_string();
        }
        mant = (mant * scale).round() / scale;
        // 9.9996 rounds up to 10.000
        if mant.abs() >= 10.0 {
            mant /= 10.0;
            exp += 1;
        }
        return format!(
            "{}×10{}",
            trim_zeros(&format!("{mant:.digits$}")),
            superscript(exp)
        );
    }

    trim_zeros(&format!("{x:.digits$}"))
}

/// `x / 10^exp`, scaled in two steps where `10^exp` alone would underflow.
fn mantissa(x: f64, exp: i32) -> f64 {
    if exp < -300 {
        (x * 1e300) / 10f64.powi(exp + 300)
    } else {
        x / 10f64.powi(exp)
    }
}

fn trim_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|ch| match ch {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            '-' => '⁻',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_range() {
        assert_eq!(format_eng(62.831_853, 3), "62.832");
        assert_eq!(format_eng(1.0, 3), "1");
        assert_eq!(format_eng(0.5, 3), "0.5");
        assert_eq!(format_eng(-12.25, 3), "-12.25");
        assert_eq!(format_eng(0.01, 3), "0.01");
    }

    #[test]
    fn test_scientific_range() {
        assert_eq!(format_eng(1591.549, 3), "1.592×10³");
        assert_eq!(format_eng(1e-6, 3), "1×10⁻⁶");
        assert_eq!(format_eng(31_830.99, 3), "3.183×10⁴");
        assert_eq!(format_eng(-2.5e-3, 2), "-2.5×10⁻³");
    }

    #[test]
    fn test_mantissa_rounding_carries() {
        assert_eq!(format_eng(9999.6, 3), "1×10⁴");
    }

    #[test]
    fn test_subnormal_input() {
        assert_eq!(format_eng(5e-324, 3), "4.941×10⁻³²⁴");
        assert_eq!(format_eng(-2.5e-310, 2), "-2.5×10⁻³¹⁰");
    }

    #[test]
    fn test_digits_are_capped() {
        assert_eq!(format_eng(1.5, 500), "1.5");
        let big = format_eng(1591.549, 400);
        assert!(big.starts_with("1.5915"), "{big}");
        assert!(big.ends_with("×10³"), "{big}");
        assert_eq!(format_eng(f64::MAX, 3), "1.798×10³⁰⁸");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_eng(0.0, 3), "0");
        assert_eq!(format_eng(f64::NAN, 3), "-");
        assert_eq!(format_eng(f64::INFINITY, 3), "-");
    }
}
