//! Core sparr types and error handling.
//!
//! This crate provides the foundational types shared by every stage of the
//! sparr pipeline: the numeric cell type, register designators, source
//! positions, and the error type raised by the scanner, parser and VM.
//!
//! # Overview
//!
//! - [`Number`] - Numeric value held by registers, literals and the stack
//! - [`Register`] - Addressable register designator (`r0`-`r9`, `rv`, `rc`)
//! - [`SparrError`] - Terminal error with kind, message and position
//! - [`ErrorKind`] - Lex, parse or runtime failure
//! - [`SourcePosition`] - Source line of a token or instruction
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, Register, SparrError, SourcePosition};
//!
//! let reg = Register::general(3).unwrap();
//! assert_eq!(reg.to_string(), "r3");
//!
//! let error = SparrError::new(
//!     ErrorKind::ParseError,
//!     "unknown command \"jmp\"",
//!     Some(SourcePosition::new(4)),
//! );
//! assert_eq!(error.line(), Some(4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod register;
mod source;
mod value;

pub use error::{ErrorKind, SparrError, SparrResult};
pub use register::{Register, GENERAL_REGISTER_COUNT};
pub use source::SourcePosition;
pub use value::{format_number, to_char, Number};
