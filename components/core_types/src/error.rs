//! Sparr error types.
//!
//! Every failure in the pipeline is terminal: the scanner, parser and VM
//! return a [`SparrError`] and stop. Only the CLI turns one into an exit code.

use std::fmt;

use crate::SourcePosition;

/// The stage that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character or malformed register token
    LexError,
    /// Malformed line: bad arity, unknown command, bad operand
    ParseError,
    /// Failure while executing a program
    RuntimeError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::LexError => write!(f, "LexError"),
            ErrorKind::ParseError => write!(f, "ParseError"),
            ErrorKind::RuntimeError => write!(f, "RuntimeError"),
        }
    }
}

/// An error raised while scanning, parsing or running a program.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, SparrError};
///
/// let error = SparrError::new(ErrorKind::RuntimeError, "tried to pop from empty stack", None);
/// assert_eq!(error.to_string(), "RuntimeError: tried to pop from empty stack");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}{}: {message}", .position.as_ref().map(|p| format!(" (line {})", p.line)).unwrap_or_default())]
pub struct SparrError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source position where the error occurred, when known
    pub position: Option<SourcePosition>,
}

impl SparrError {
    /// Create a new error
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: Option<SourcePosition>) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
        }
    }

    /// Line the error refers to, if any
    pub fn line(&self) -> Option<u32> {
        self.position.map(|p| p.line)
    }
}

/// Result alias used across the pipeline
pub type SparrResult<T> = Result<T, SparrError>;
