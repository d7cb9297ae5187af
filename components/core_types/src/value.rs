//! Numeric values and their textual forms.
//!
//! Every register, literal and stack cell holds an IEEE-754 double. Division
//! by zero and other edge cases follow host float semantics.

use num_traits::ToPrimitive;

/// Numeric value stored in registers and on the stack.
pub type Number = f64;

/// Format a number the way `wrt` and `wrts` print it.
///
/// Integral values print without a fractional part, everything else uses the
/// shortest representation that round-trips.
///
/// # Examples
///
/// ```
/// use core_types::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: Number) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }
    format!("{}", value)
}

/// Interpret a number as a Unicode code point.
///
/// The value is truncated toward zero. Anything that is not a Unicode scalar
/// value maps to U+FFFD.
///
/// # Examples
///
/// ```
/// use core_types::to_char;
///
/// assert_eq!(to_char(72.0), 'H');
/// assert_eq!(to_char(-1.0), '\u{FFFD}');
/// ```
pub fn to_char(value: Number) -> char {
    value
        .trunc()
        .to_u32()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
