//! Instruction representation
//!
//! An instruction is an operation tagged with the source line it came from.

use core_types::SourcePosition;

use crate::opcode::Operation;

/// A single instruction with its source line
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// The operation to perform
    pub operation: Operation,
    /// Line the instruction was parsed from (its program address)
    pub source_position: SourcePosition,
}

impl Instruction {
    /// Create a new instruction on the given line
    pub fn new(operation: Operation, line: u32) -> Self {
        Self {
            operation,
            source_position: SourcePosition::new(line),
        }
    }

    /// Padding instruction for a line without code
    pub fn noop(line: u32) -> Self {
        Self::new(Operation::NoOp, line)
    }

    /// Source line of this instruction
    pub fn line(&self) -> u32 {
        self.source_position.line
    }

    /// Check if this is line padding
    pub fn is_noop(&self) -> bool {
        matches!(self.operation, Operation::NoOp)
    }
}
