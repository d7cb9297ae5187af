//! Line-indexed program table
//!
//! The program counter holds a source line number, so the table is addressed
//! by line: index 0 is padding, index N holds the instruction on line N, and
//! lines without code are filled with `NoOp`.

use std::fmt::Write;

use crate::instruction::Instruction;
use crate::opcode::Operation;

/// An executable program addressed by source line
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Instructions indexed by line number
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create an empty program (halts immediately)
    pub fn new() -> Self {
        Self {
            instructions: vec![Instruction::noop(0)],
        }
    }

    /// Build the line-indexed table from parsed instructions
    ///
    /// Each instruction lands at its own line index. Every other index from 0
    /// to the highest line is a `NoOp`. If two instructions claim the same
    /// line the later one wins.
    ///
    /// # Example
    ///
    /// ```
    /// use instruction_set::{Instruction, Operation, Program};
    ///
    /// let program = Program::from_instructions(vec![
    ///     Instruction::new(Operation::Push, 2),
    ///     Instruction::new(Operation::Pop, 5),
    /// ]);
    ///
    /// assert_eq!(program.len(), 6);
    /// assert!(program.get(3).unwrap().is_noop());
    /// assert_eq!(program.get(5).unwrap().operation, Operation::Pop);
    /// ```
    pub fn from_instructions(instructions: impl IntoIterator<Item = Instruction>) -> Self {
        let mut program = Self::new();
        for inst in instructions {
            program.place(inst);
        }
        program
    }

    /// Store an instruction at its line, growing the table with padding
    pub fn place(&mut self, instruction: Instruction) {
        let index = instruction.line() as usize;
        if index >= self.instructions.len() {
            let start = self.instructions.len() as u32;
            self.instructions
                .extend((start..=instruction.line()).map(Instruction::noop));
        }
        self.instructions[index] = instruction;
    }

    /// Instruction stored at a line
    pub fn get(&self, line: usize) -> Option<&Instruction> {
        self.instructions.get(line)
    }

    /// Table length (highest line + 1)
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the program has no executable lines
    pub fn is_empty(&self) -> bool {
        self.instructions.len() <= 1
    }

    /// Number of real (non-padding) instructions
    pub fn instruction_count(&self) -> usize {
        self.instructions.iter().filter(|i| !i.is_noop()).count()
    }

    /// Iterate over the whole table, padding included
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    /// Operations in line order, padding included
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.instructions.iter().map(|i| &i.operation)
    }

    /// Render a listing of the real instructions, one per line
    ///
    /// ```
    /// use instruction_set::{Instruction, Operand, Operation, Program};
    ///
    /// let program = Program::from_instructions(vec![
    ///     Instruction::new(Operation::Set(Operand::Literal(3.0)), 1),
    ///     Instruction::new(Operation::WriteStack, 3),
    /// ]);
    /// assert_eq!(program.listing(), "1: set 3\n3: wrts\n");
    /// ```
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for inst in self.instructions.iter().filter(|i| !i.is_noop()) {
            let _ = writeln!(out, "{}: {}", inst.line(), inst.operation);
        }
        out
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
