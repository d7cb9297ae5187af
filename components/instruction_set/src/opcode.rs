//! Sparr operations
//!
//! Defines the closed set of actions an instruction can perform and the
//! operands they take.

use std::fmt;

use core_types::{format_number, Number, Register};

/// Comparison used by conditional copies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// `a > b`
    GT,
    /// `a < b`
    LT,
    /// `a == b`
    EQ,
}

impl Condition {
    /// Parse a condition suffix such as `gt` or `EQ` (case-insensitive)
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_uppercase().as_str() {
            "GT" => Some(Condition::GT),
            "LT" => Some(Condition::LT),
            "EQ" => Some(Condition::EQ),
            _ => None,
        }
    }

    /// Evaluate the comparison
    pub fn holds(self, a: Number, b: Number) -> bool {
        match self {
            Condition::GT => a > b,
            Condition::LT => a < b,
            Condition::EQ => a == b,
        }
    }

    /// Lower-case suffix used in the source mnemonic
    pub fn suffix(self) -> &'static str {
        match self {
            Condition::GT => "gt",
            Condition::LT => "lt",
            Condition::EQ => "eq",
        }
    }
}

/// A value read by an instruction: a literal or a register
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Constant number
    Literal(Number),
    /// Current contents of a register
    Register(Register),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{}", format_number(*value)),
            Operand::Register(reg) => write!(f, "{}", reg),
        }
    }
}

/// Operations executed by the VM
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// No effect; fills lines without an instruction
    NoOp,

    // Accumulator and stack
    /// `v := x`
    Set(Operand),
    /// Push the current `v`
    Push,
    /// Pop the top of the stack into `v`
    Pop,

    // Data movement
    /// `dst := src`
    Copy {
        /// Value to copy
        src: Operand,
        /// Register written
        dst: Register,
    },
    /// `dst := src` when `condition(a, b)` holds
    ConditionalCopy {
        /// Comparison applied to `a` and `b`
        condition: Condition,
        /// Left side of the comparison
        a: Operand,
        /// Right side of the comparison
        b: Operand,
        /// Value to copy
        src: Operand,
        /// Register written
        dst: Register,
    },

    // Arithmetic, result stored in `v`
    /// `v := a + b`
    Add(Operand, Operand),
    /// `v := a - b`
    Sub(Operand, Operand),
    /// `v := a * b`
    Mul(Operand, Operand),
    /// `v := a / b`
    Div(Operand, Operand),

    // Output
    /// Print a number
    Write(Operand),
    /// Print a number as a character
    WriteChar(Operand),
    /// Print the stack top-to-bottom and clear it
    WriteStack,
    /// Print the stack top-to-bottom as characters and clear it
    WriteStackChars,
}

impl Operation {
    /// Source mnemonic for this operation
    pub fn mnemonic(&self) -> String {
        match self {
            Operation::NoOp => "noop".to_string(),
            Operation::Set(_) => "set".to_string(),
            Operation::Push => "push".to_string(),
            Operation::Pop => "pop".to_string(),
            Operation::Copy { .. } => "cp".to_string(),
            Operation::ConditionalCopy { condition, .. } => format!("cp{}", condition.suffix()),
            Operation::Add(..) => "add".to_string(),
            Operation::Sub(..) => "sub".to_string(),
            Operation::Mul(..) => "mul".to_string(),
            Operation::Div(..) => "div".to_string(),
            Operation::Write(_) => "wrt".to_string(),
            Operation::WriteChar(_) => "wrtc".to_string(),
            Operation::WriteStack => "wrts".to_string(),
            Operation::WriteStackChars => "wrtsc".to_string(),
        }
    }

    /// Operands in source order
    pub fn operands(&self) -> Vec<Operand> {
        match self {
            Operation::NoOp
            | Operation::Push
            | Operation::Pop
            | Operation::WriteStack
            | Operation::WriteStackChars => vec![],
            Operation::Set(x) | Operation::Write(x) | Operation::WriteChar(x) => vec![*x],
            Operation::Copy { src, dst } => vec![*src, Operand::Register(*dst)],
            Operation::ConditionalCopy { a, b, src, dst, .. } => {
                vec![*a, *b, *src, Operand::Register(*dst)]
            }
            Operation::Add(a, b)
            | Operation::Sub(a, b)
            | Operation::Mul(a, b)
            | Operation::Div(a, b) => vec![*a, *b],
        }
    }

    /// Number of operands the operation takes
    pub fn arity(&self) -> usize {
        self.operands().len()
    }

    /// Check if this operation produces output
    pub fn is_output(&self) -> bool {
        matches!(
            self,
            Operation::Write(_)
                | Operation::WriteChar(_)
                | Operation::WriteStack
                | Operation::WriteStackChars
        )
    }

    /// Check if this operation can write the program counter
    pub fn may_jump(&self) -> bool {
        match self {
            Operation::Copy { dst, .. } | Operation::ConditionalCopy { dst, .. } => {
                *dst == Register::Counter
            }
            _ => false,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())?;
        for operand in self.operands() {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}
