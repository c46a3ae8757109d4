//! Numeric parsing and formatting policy.
//!
//! Operands are kept as text while typed and only parsed when an operation
//! needs their value. Results are written back with the shortest decimal
//! text that round-trips to the same `f64`.

/// Magnitudes at or above this use exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Non-zero magnitudes below this use exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Parse operand text as an `f64`.
///
/// Returns `None` for empty or malformed text and for `NaN`, which the
/// engine treats as "no usable value".
///
/// # Example
///
/// ```rust
/// use tallybox::core::number::parse_operand;
///
/// assert_eq!(parse_operand("12.5"), Some(12.5));
/// assert_eq!(parse_operand("0."), Some(0.0));
/// assert_eq!(parse_operand(""), None);
/// assert_eq!(parse_operand("5 + "), None);
/// ```
pub fn parse_operand(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Format a value with the shortest round-trip decimal representation.
///
/// Negative zero prints as `0`. Very large and very small magnitudes use
/// exponent form with an explicit exponent sign.
///
/// # Example
///
/// ```rust
/// use tallybox::core::number::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Format the memory register with exactly two fraction digits.
pub fn format_memory(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    if value == 0.0 {
        return "0.00".to_string();
    }
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_partial_decimals() {
        assert_eq!(parse_operand("7"), Some(7.0));
        assert_eq!(parse_operand("0.25"), Some(0.25));
        assert_eq!(parse_operand("3."), Some(3.0));
        assert_eq!(parse_operand("-4"), Some(-4.0));
        assert_eq!(parse_operand("1e+21"), Some(1e21));
    }

    #[test]
    fn parse_rejects_garbage_and_nan() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("1.2.3"), None);
        assert_eq!(parse_operand("NaN"), None);
    }

    #[test]
    fn parse_reads_back_formatted_infinity() {
        assert_eq!(parse_operand(&format_number(f64::INFINITY)), Some(f64::INFINITY));
        assert_eq!(
            parse_operand(&format_number(f64::NEG_INFINITY)),
            Some(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(118.0), "118");
    }

    #[test]
    fn fractions_are_shortest_round_trip() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn exponent_form_at_the_edges() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn memory_uses_two_fraction_digits() {
        assert_eq!(format_memory(0.0), "0.00");
        assert_eq!(format_memory(-0.0), "0.00");
        assert_eq!(format_memory(9.0), "9.00");
        assert_eq!(format_memory(2.5), "2.50");
        assert_eq!(format_memory(-12.346), "-12.35");
    }
}
