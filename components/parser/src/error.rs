//! Parser error types and helpers

use core_types::{ErrorKind, SourcePosition, SparrError};

/// Create a lex error at a given line
pub fn lex_error(message: impl Into<String>, line: u32) -> SparrError {
    SparrError::new(ErrorKind::LexError, message, Some(SourcePosition::new(line)))
}

/// Create a parse error at a given line
pub fn parse_error(message: impl Into<String>, line: u32) -> SparrError {
    SparrError::new(ErrorKind::ParseError, message, Some(SourcePosition::new(line)))
}

/// Create a wrong-arity error for a command
pub fn arity_mismatch(command: &str, expected: usize, actual: usize, line: u32) -> SparrError {
    parse_error(
        format!(
            "invalid number of arguments ({}) for {} command, expected {}",
            actual, command, expected
        ),
        line,
    )
}
