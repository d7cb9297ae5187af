//! Initial-stack file format
//!
//! One value per line. Lines are trimmed and blank lines skipped. A line that
//! parses as a signed integer is that number; anything else contributes the
//! code point of its first character.

use core_types::Number;

/// Parse initial-stack text into values in file order
///
/// # Example
///
/// ```
/// use sparr_cli::parse_initial_stack;
///
/// assert_eq!(parse_initial_stack("12\n\nA\n-3\n"), vec![12.0, 65.0, -3.0]);
/// ```
pub fn parse_initial_stack(text: &str) -> Vec<Number> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_value)
        .collect()
}

fn parse_value(line: &str) -> Option<Number> {
    match line.parse::<i64>() {
        Ok(value) => Some(value as Number),
        Err(_) => line.chars().next().map(|c| u32::from(c) as Number),
    }
}
