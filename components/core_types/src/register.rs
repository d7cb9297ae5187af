//! Register designators.
//!
//! The machine has ten general registers and two special ones: the result
//! register `v` and the program counter `c`. All twelve share one addressing
//! scheme, which is what makes jumps ordinary register writes.

use std::fmt;

use serde::Serialize;

/// Number of general registers (`r0`..`r9`)
pub const GENERAL_REGISTER_COUNT: usize = 10;

/// An addressable register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Register {
    /// General register `r0`..`r9`
    General(u8),
    /// Result/accumulator register `rv`
    Result,
    /// Program counter `rc`
    Counter,
}

impl Register {
    /// Total number of register slots in a register bank
    pub const SLOTS: usize = GENERAL_REGISTER_COUNT + 2;

    /// Build a general register, returning `None` when `index` is outside `0..=9`
    pub fn general(index: u64) -> Option<Self> {
        if index < GENERAL_REGISTER_COUNT as u64 {
            Some(Register::General(index as u8))
        } else {
            None
        }
    }

    /// Build a special register from its designator letter (`v` or `c`)
    pub fn special(letter: char) -> Option<Self> {
        match letter {
            'v' => Some(Register::Result),
            'c' => Some(Register::Counter),
            _ => None,
        }
    }

    /// Index of this register in a flat register bank
    pub fn slot(self) -> usize {
        match self {
            Register::General(index) => index as usize,
            Register::Result => GENERAL_REGISTER_COUNT,
            Register::Counter => GENERAL_REGISTER_COUNT + 1,
        }
    }

    /// Every register, in slot order
    pub fn all() -> impl Iterator<Item = Register> {
        (0..GENERAL_REGISTER_COUNT as u8)
            .map(Register::General)
            .chain([Register::Result, Register::Counter])
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::General(index) => write!(f, "r{}", index),
            Register::Result => write!(f, "rv"),
            Register::Counter => write!(f, "rc"),
        }
    }
}
