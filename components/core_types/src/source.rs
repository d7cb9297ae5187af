//! Source position tracking.
//!
//! Sparr is line oriented, so a position is just the 1-based line number.
//! Line numbers double as program addresses.

use serde::Serialize;

/// Represents a position in source code.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition::new(10);
/// assert_eq!(pos.line, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
}

impl SourcePosition {
    /// Create a new source position
    pub fn new(line: u32) -> Self {
        Self { line }
    }
}
