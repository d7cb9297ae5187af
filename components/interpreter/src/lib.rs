//! Register-machine interpreter for sparr programs
//!
//! This crate executes a line-indexed [`instruction_set::Program`] with:
//! - A register bank of ten general registers plus `rv` (result) and `rc`
//!   (program counter)
//! - An unbounded value stack
//! - Jumps expressed as writes to `rc`
//! - Pluggable console output
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use interpreter::{CaptureWriter, VM};
//! use parser::parse_program;
//!
//! let program = parse_program("set 3\nadd rv 4\nwrt rv").unwrap();
//! let output = Rc::new(RefCell::new(Vec::new()));
//!
//! let mut vm = VM::new(program).with_console(Box::new(CaptureWriter::new(output.clone())));
//! vm.run().unwrap();
//!
//! assert_eq!(*output.borrow(), vec!["7".to_string()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod console;
pub mod context;
pub mod dispatch;
pub mod vm;

// Re-export main types at crate root
pub use console::{CaptureWriter, ConsoleWriter, StdoutWriter};
pub use context::{ExecutionContext, MachineSnapshot};
pub use dispatch::Dispatcher;
pub use vm::VM;
