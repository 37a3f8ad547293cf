//! Instruction Set Definitions.
//!
//! Contains the instruction type, the text decoder, and the disassembler, plus
//! [`Program`], the ordered instruction sequence a run executes.

/// Program text decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction type and timing.
pub mod instruction;

use std::slice;

pub use decode::{decode_line, decode_program};
pub use instruction::Instruction;

/// An ordered, immutable instruction sequence.
///
/// Execution order is insertion order. The simulator walks it with a cursor
/// instead of removing instructions, so one program can back any number of
/// runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps a vector of instructions.
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Returns the instruction at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Instruction> {
        self.instructions.get(index).copied()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterates over the instructions in execution order.
    pub fn iter(&self) -> slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// The instructions as a slice.
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Cycles the whole program takes with the default timing.
    pub fn total_latency(&self) -> u64 {
        instruction::total_latency(&self.instructions)
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
