//! Virtual Machine for sparr programs
//!
//! Main entry point for executing a parsed [`Program`].

use core_types::{Number, Register, SparrResult};
use instruction_set::Program;

use crate::console::ConsoleWriter;
use crate::context::{ExecutionContext, MachineSnapshot};
use crate::dispatch::Dispatcher;

/// Virtual Machine for executing a line-indexed program
///
/// The program counter `rc` holds the line of the next instruction. Each
/// step fetches that line, advances `rc` by one and then executes, so an
/// instruction that writes `rc` decides where execution continues.
#[derive(Debug)]
pub struct VM {
    /// Program table, index 0 is a NoOp
    program: Program,
    /// Registers and stack
    context: ExecutionContext,
    /// Dispatcher for instruction execution
    dispatcher: Dispatcher,
    /// Maximum number of steps before aborting, if any
    step_limit: Option<u64>,
}

impl VM {
    /// Create a new VM for `program`, writing to stdout
    pub fn new(program: Program) -> Self {
        Self {
            program,
            context: ExecutionContext::new(),
            dispatcher: Dispatcher::new(),
            step_limit: None,
        }
    }

    /// Send program output to `console`
    pub fn with_console(mut self, console: Box<dyn ConsoleWriter>) -> Self {
        self.dispatcher = Dispatcher::with_console(console);
        self
    }

    /// Seed the stack; the last value ends up on top
    pub fn with_initial_stack(mut self, values: impl IntoIterator<Item = Number>) -> Self {
        for value in values {
            self.context.push(value);
        }
        self
    }

    /// Abort with a runtime error once more than `limit` steps have run
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Whether `rc` points outside the program
    ///
    /// Zero, negative lines, lines past the end and NaN all halt.
    pub fn is_halted(&self) -> bool {
        let counter = self.context.counter();
        !(counter > 0.0 && counter < self.program.len() as f64)
    }

    /// Execute a single instruction
    ///
    /// Returns `Ok(false)` without doing anything when the VM has halted.
    pub fn step(&mut self) -> SparrResult<bool> {
        if self.is_halted() {
            return Ok(false);
        }

        let counter = self.context.counter();
        let line = counter.trunc() as usize;
        let Some(instruction) = self.program.get(line) else {
            return Ok(false);
        };

        if let Some(limit) = self.step_limit {
            if self.context.steps >= limit {
                return Err(self.context.runtime_error(
                    format!("step limit of {} exceeded", limit),
                    instruction.line(),
                ));
            }
        }

        tracing::trace!(line, operation = %instruction.operation, "step");
        self.context.set_register(Register::Counter, counter + 1.0);
        self.context.steps += 1;
        self.dispatcher.execute(&mut self.context, instruction)?;
        Ok(true)
    }

    /// Run until the program counter leaves the program
    pub fn run(&mut self) -> SparrResult<()> {
        while self.step()? {}
        tracing::debug!(
            steps = self.context.steps,
            counter = self.context.counter(),
            "program halted"
        );
        Ok(())
    }

    /// Current value of a register
    pub fn register(&self, register: Register) -> Number {
        self.context.get_register(register)
    }

    /// Stack contents, bottom first
    pub fn stack(&self) -> &[Number] {
        self.context.stack()
    }

    /// Number of instructions executed so far
    pub fn steps(&self) -> u64 {
        self.context.steps
    }

    /// Serializable copy of the machine state
    pub fn snapshot(&self) -> MachineSnapshot {
        self.context.snapshot()
    }

    /// The program being executed
    pub fn program(&self) -> &Program {
        &self.program
    }
}
