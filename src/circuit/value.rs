//! Parsing of component values with SI suffixes.

/// Parse a numeric value with an optional SI suffix.
///
/// Accepts anything [`str::parse::<f64>`] accepts, optionally followed by one
/// of `p n u µ μ m k K M G`. Surrounding whitespace is ignored. Returns `None`
/// for empty or malformed text; range checks are left to the caller.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (num_str, multiplier) = match text.chars().last() {
        Some(last) => match suffix_multiplier(last) {
            Some(mult) => (&text[..text.len() - last.len_utf8()], mult),
            None => (text, 1.0),
        },
        None => (text, 1.0),
    };

    num_str.trim_end().parse::<f64>().ok().map(|v| v * multiplier)
}

fn suffix_multiplier(c: char) -> Option<f64> {
    match c {
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        'u' | 'µ' | 'μ' => Some(1e-6),
        'm' => Some(1e-3),
        'k' | 'K' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("100"), Some(100.0)));
        assert!(approx_eq(parse_value("10m"), Some(0.01)));
        assert!(approx_eq(parse_value("1u"), Some(1e-6)));
        assert!(approx_eq(parse_value("1µ"), Some(1e-6)));
        assert!(approx_eq(parse_value("2.2μ"), Some(2.2e-6)));
        assert!(approx_eq(parse_value("4.7k"), Some(4_700.0)));
        assert!(approx_eq(parse_value("1e-6"), Some(1e-6)));
        assert!(approx_eq(parse_value(" 0.000001 "), Some(1e-6)));
        assert!(approx_eq(parse_value("2.2 n"), Some(2.2e-9)));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("k"), None);
        assert_eq!(parse_value("1..2"), None);
    }

    #[test]
    fn test_parse_value_keeps_sign_and_specials() {
        assert!(approx_eq(parse_value("-5"), Some(-5.0)));
        assert!(parse_value("NaN").is_some_and(f64::is_nan));
        assert!(parse_value("inf").is_some_and(f64::is_infinite));
    }
}
