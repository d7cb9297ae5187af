//! Machine state for the VM
//!
//! Registers live in one flat bank keyed by [`Register`]. The program counter
//! is an ordinary entry, so the execution loop and user instructions read and
//! write it the same way.

use core_types::{ErrorKind, Number, Register, SourcePosition, SparrError, GENERAL_REGISTER_COUNT};
use instruction_set::Operand;
use serde::Serialize;

/// Initial value of the result register `v`
pub const INITIAL_RESULT: Number = 1.0;
/// Initial value of the program counter `c` (first source line)
pub const INITIAL_COUNTER: Number = 1.0;

/// Registers, stack and step count of a running program
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionContext {
    /// Register bank indexed by [`Register::slot`]
    registers: [Number; Register::SLOTS],
    /// Value stack, top is the last element
    stack: Vec<Number>,
    /// Number of instructions executed so far
    pub steps: u64,
}

impl ExecutionContext {
    /// Create a fresh machine state: `v = 1`, `c = 1`, everything else zero
    pub fn new() -> Self {
        let mut registers = [0.0; Register::SLOTS];
        registers[Register::Result.slot()] = INITIAL_RESULT;
        registers[Register::Counter.slot()] = INITIAL_COUNTER;
        Self {
            registers,
            stack: Vec::new(),
            steps: 0,
        }
    }

    /// Get register value
    pub fn get_register(&self, register: Register) -> Number {
        self.registers[register.slot()]
    }

    /// Set register value
    pub fn set_register(&mut self, register: Register, value: Number) {
        self.registers[register.slot()] = value;
    }

    /// Current program counter
    pub fn counter(&self) -> Number {
        self.get_register(Register::Counter)
    }

    /// Resolve an operand to its current numeric value
    pub fn resolve(&self, operand: Operand) -> Number {
        match operand {
            Operand::Literal(value) => value,
            Operand::Register(register) => self.get_register(register),
        }
    }

    /// Push a value on the stack
    pub fn push(&mut self, value: Number) {
        self.stack.push(value);
    }

    /// Pop the top of the stack
    pub fn pop(&mut self) -> Option<Number> {
        self.stack.pop()
    }

    /// Stack contents, bottom first
    pub fn stack(&self) -> &[Number] {
        &self.stack
    }

    /// Remove every stack value, returning them top first
    pub fn drain_stack(&mut self) -> Vec<Number> {
        let mut values = std::mem::take(&mut self.stack);
        values.reverse();
        values
    }

    /// Capture the current state for diagnostics
    pub fn snapshot(&self) -> MachineSnapshot {
        let mut general = [0.0; GENERAL_REGISTER_COUNT];
        general.copy_from_slice(&self.registers[..GENERAL_REGISTER_COUNT]);
        MachineSnapshot {
            general,
            v: self.get_register(Register::Result),
            c: self.get_register(Register::Counter),
            stack: self.stack.clone(),
            steps: self.steps,
        }
    }

    /// Build a runtime error carrying a JSON snapshot of this state
    pub fn runtime_error(&self, message: impl Into<String>, line: u32) -> SparrError {
        let snapshot = self.snapshot();
        let state = serde_json::to_string(&snapshot).unwrap_or_else(|_| format!("{:?}", snapshot));
        SparrError::new(
            ErrorKind::RuntimeError,
            format!("{}. State: {}", message.into(), state),
            Some(SourcePosition::new(line)),
        )
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable copy of the machine state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineSnapshot {
    /// General registers `r0`..`r9`
    pub general: [Number; GENERAL_REGISTER_COUNT],
    /// Result register
    pub v: Number,
    /// Program counter
    pub c: Number,
    /// Stack, bottom first
    pub stack: Vec<Number>,
    /// Instructions executed
    pub steps: u64,
}
