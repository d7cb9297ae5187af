//! Sparr Parser Component
//!
//! Provides the scanner, token model and parser that turn sparr source text
//! into line-tagged instructions.
//!
//! # Overview
//!
//! - [`Scanner`] - Tokenizes source code, one `LineEnd` per newline
//! - [`Token`] - Token with kind, lexeme, value and line
//! - [`Parser`] - Groups tokens by line and validates each command
//! - [`parse_program`] - Source text straight to a line-indexed [`Program`]
//!
//! # Example
//!
//! ```
//! use parser::parse_program;
//!
//! let program = parse_program("set 3\n# comment\nwrt rv").unwrap();
//! assert_eq!(program.len(), 4);
//! assert!(program.get(2).unwrap().is_noop());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;

use core_types::SparrResult;
use instruction_set::Program;

pub use parser::Parser;
pub use scanner::Scanner;
pub use token::{tokens_to_string, Token, TokenKind, TokenValue};

/// Scan, parse and materialize a program in one step
pub fn parse_program(source: &str) -> SparrResult<Program> {
    let tokens = Scanner::new(source).scan_tokens()?;
    let instructions = Parser::new(tokens).parse()?;
    Ok(Program::from_instructions(instructions))
}
