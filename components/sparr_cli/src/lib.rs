//! Sparr CLI Library
//!
//! Provides the Runtime struct and supporting modules for the `sparr` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod stack_file;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use runtime::Runtime;
pub use stack_file::parse_initial_stack;
