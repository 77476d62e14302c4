//! Display formatting and parsing of the number shown on the calculator.
//!
//! The convention is fixed and locale independent: `.` as the decimal point,
//! no grouping separators, no exponent notation.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Maximum fractional digits shown for a computed value.
pub const MAX_FRACTION_DIGITS: u32 = 16;

/// Renders a computed value for the display.
///
/// Rounds to [`MAX_FRACTION_DIGITS`] (midpoint away from zero) and trims
/// trailing zeros. Negative zero renders as `"0"`.
///
/// # Examples
///
/// ```
/// use calc_core::format::to_display_string;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(to_display_string(dec!(12.500)), "12.5");
/// assert_eq!(to_display_string(dec!(1) / dec!(3)), "0.3333333333333333");
/// ```
pub fn to_display_string(value: Decimal) -> String {
    value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Parses the text of the number being entered.
///
/// Accepts a trailing decimal point (`"3."`), which entry produces while the
/// user is still typing. Returns `None` for anything else that is not a
/// decimal, including numbers too large to represent.
pub fn parse_entry(text: &str) -> Option<Decimal> {
    let digits = text.strip_suffix('.').unwrap_or(text);
    Decimal::from_str(digits).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn to_display_string_trims_trailing_zeros() {
        assert_eq!(to_display_string(dec!(1024.000)), "1024");
        assert_eq!(to_display_string(dec!(0.50)), "0.5");
    }

    #[test]
    fn to_display_string_keeps_integers_whole() {
        assert_eq!(to_display_string(dec!(1000000)), "1000000");
    }

    #[test]
    fn to_display_string_rounds_to_sixteen_fraction_digits() {
        let two_thirds = dec!(2) / dec!(3);

        assert_eq!(to_display_string(two_thirds), "0.6666666666666667");
    }

    #[test]
    fn to_display_string_renders_negative_values() {
        assert_eq!(to_display_string(dec!(-12.25)), "-12.25");
    }

    #[test]
    fn to_display_string_tiny_negative_renders_as_zero() {
        assert_eq!(to_display_string(dec!(-0.00000000000000000001)), "0");
    }

    #[test]
    fn parse_entry_accepts_typed_numbers() {
        assert_eq!(parse_entry("0"), Some(dec!(0)));
        assert_eq!(parse_entry("42"), Some(dec!(42)));
        assert_eq!(parse_entry("-3.75"), Some(dec!(-3.75)));
    }

    #[test]
    fn parse_entry_accepts_trailing_decimal_point() {
        assert_eq!(parse_entry("3."), Some(dec!(3)));
        assert_eq!(parse_entry("0."), Some(dec!(0)));
    }

    #[test]
    fn parse_entry_rejects_non_numbers() {
        assert_eq!(parse_entry("Error"), None);
        assert_eq!(parse_entry(""), None);
        assert_eq!(parse_entry("."), None);
    }

    #[test]
    fn parse_entry_rejects_values_out_of_range() {
        assert_eq!(parse_entry("99999999999999999999999999999999"), None);
    }
}
