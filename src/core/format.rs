//! Number formatting rules for operand and history text.
//!
//! Every computed value (calculation result, percentage, square root,
//! memory recall) passes through [`format_number`] before being stored
//! back as operand text, so the display never shows a trailing `.0`.

/// Format a computed value for display.
///
/// Mathematically integral values collapse to an integer literal;
/// everything else uses `f64`'s default decimal conversion.
///
/// # Example
///
/// ```rust
/// use abacus::core::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(-2.0), "-2");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(0.125), "0.125");
/// ```
pub fn format_number(value: f64) -> String {
    if value % 1.0 == 0.0 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// Render a parsed operand for history text.
///
/// History entries record the operands as parsed numbers, not as the
/// capped entry text, with an explicit decimal marker: entering `2`
/// shows up in history as `2.0`. Non-integral values keep their
/// shortest round-trip digits.
///
/// # Example
///
/// ```rust
/// use abacus::core::decimal_literal;
///
/// assert_eq!(decimal_literal(2.0), "2.0");
/// assert_eq!(decimal_literal(0.5), "0.5");
/// assert_eq!(decimal_literal(-7.0), "-7.0");
/// ```
pub fn decimal_literal(value: f64) -> String {
    format!("{value:?}")
}

/// Parse operand entry text as a number.
///
/// Returns `None` for empty text and for the `"Error"` sentinel, which
/// is how every precondition check degrades to a no-op.
pub(crate) fn parse_operand(text: &str) -> Option<f64> {
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_collapse_to_integer_literals() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(144.0), "144");
    }

    #[test]
    fn fractional_values_keep_decimal_digits() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn decimal_literal_always_carries_a_marker() {
        assert_eq!(decimal_literal(2.0), "2.0");
        assert_eq!(decimal_literal(100.0), "100.0");
        assert_eq!(decimal_literal(3.25), "3.25");
    }

    #[test]
    fn parse_operand_accepts_plain_and_decimal_entry() {
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("3.5"), Some(3.5));
        // A trailing dot is valid mid-entry text
        assert_eq!(parse_operand("6."), Some(6.0));
    }

    #[test]
    fn parse_operand_rejects_blank_and_sentinel_text() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("Error"), None);
    }

    #[test]
    fn formatting_round_trips_through_parse() {
        for value in [0.0, 1.0, -3.0, 2.5, 0.1, 1234.5678] {
            let text = format_number(value);
            assert_eq!(parse_operand(&text), Some(value));
        }
    }
}
