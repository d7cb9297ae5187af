//! Integration test suite for the sparr interpreter
//!
//! Verifies that the scanner, parser, program table, VM and CLI runtime work
//! together across crate boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use instruction_set;
    pub use interpreter;
    pub use parser;
    pub use sparr_cli;
}
