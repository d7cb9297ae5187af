//! Dispatch for sparr operations
//!
//! Handles individual instruction execution against an [`ExecutionContext`].

use core_types::{format_number, to_char, Register, SparrResult};
use instruction_set::{Instruction, Operation};

use crate::console::{ConsoleWriter, StdoutWriter};
use crate::context::ExecutionContext;

/// Dispatch handler for executing instructions
pub struct Dispatcher {
    /// Sink for every write instruction
    console: Box<dyn ConsoleWriter>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("console", &"ConsoleWriter")
            .finish()
    }
}

impl Dispatcher {
    /// Create a dispatcher writing to stdout
    pub fn new() -> Self {
        Self::with_console(Box::new(StdoutWriter))
    }

    /// Create a dispatcher writing to a custom console
    pub fn with_console(console: Box<dyn ConsoleWriter>) -> Self {
        Self { console }
    }

    /// Execute one instruction
    ///
    /// The program counter has already been advanced by the caller, so a
    /// write to `rc` here overrides the next line.
    pub fn execute(&self, ctx: &mut ExecutionContext, instruction: &Instruction) -> SparrResult<()> {
        match &instruction.operation {
            Operation::NoOp => {}
            Operation::Set(value) => {
                let value = ctx.resolve(*value);
                ctx.set_register(Register::Result, value);
            }
            Operation::Push => {
                let value = ctx.get_register(Register::Result);
                ctx.push(value);
            }
            Operation::Pop => {
                let Some(value) = ctx.pop() else {
                    return Err(ctx.runtime_error("pop from empty stack", instruction.line()));
                };
                ctx.set_register(Register::Result, value);
            }
            Operation::Copy { src, dst } => {
                let value = ctx.resolve(*src);
                ctx.set_register(*dst, value);
            }
            Operation::ConditionalCopy {
                condition,
                a,
                b,
                src,
                dst,
            } => {
                if condition.holds(ctx.resolve(*a), ctx.resolve(*b)) {
                    let value = ctx.resolve(*src);
                    ctx.set_register(*dst, value);
                }
            }
            Operation::Add(a, b) => {
                let result = ctx.resolve(*a) + ctx.resolve(*b);
                ctx.set_register(Register::Result, result);
            }
            Operation::Sub(a, b) => {
                let result = ctx.resolve(*a) - ctx.resolve(*b);
                ctx.set_register(Register::Result, result);
            }
            Operation::Mul(a, b) => {
                let result = ctx.resolve(*a) * ctx.resolve(*b);
                ctx.set_register(Register::Result, result);
            }
            Operation::Div(a, b) => {
                // IEEE division: x/0 is +-Infinity, 0/0 is NaN
                let result = ctx.resolve(*a) / ctx.resolve(*b);
                ctx.set_register(Register::Result, result);
            }
            Operation::Write(value) => {
                self.console.write(&format_number(ctx.resolve(*value)));
            }
            Operation::WriteChar(value) => {
                self.console.write(&to_char(ctx.resolve(*value)).to_string());
            }
            Operation::WriteStack => {
                let line = ctx
                    .drain_stack()
                    .into_iter()
                    .map(format_number)
                    .collect::<Vec<_>>()
                    .join(" ");
                self.console.write(&line);
            }
            Operation::WriteStackChars => {
                let line: String = ctx.drain_stack().into_iter().map(to_char).collect();
                self.console.write(&line);
            }
        }
        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
