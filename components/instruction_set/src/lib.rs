//! Instruction model for the sparr VM
//!
//! This crate defines what a parsed program looks like: the closed set of
//! operations, their operands, and the line-indexed program table the VM
//! executes.
//!
//! # Features
//!
//! - Tagged operations with typed operands (`Operand` vs. writable `Register`)
//! - Instructions tagged with their source line
//! - Program table addressed by line number, gaps padded with `NoOp`
//!
//! # Example
//!
//! ```
//! use core_types::Register;
//! use instruction_set::{Instruction, Operand, Operation, Program};
//!
//! let program = Program::from_instructions(vec![
//!     Instruction::new(Operation::Set(Operand::Literal(3.0)), 1),
//!     Instruction::new(Operation::Write(Operand::Register(Register::Result)), 3),
//! ]);
//!
//! assert_eq!(program.len(), 4);
//! assert!(program.get(2).unwrap().is_noop());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export main types at crate root
pub use instruction::Instruction;
pub use opcode::{Condition, Operand, Operation};
pub use program::Program;
