//! Instruction definitions.
//!
//! The device understands two instructions:
//! 1. **`noop`:** Takes one cycle and has no effect.
//! 2. **`addx V`:** Takes two cycles; after the second, `X` is increased by `V`.

use crate::common::constants::{ADDX_LATENCY, NOOP_LATENCY};

/// Mnemonic of the no-operation instruction.
pub const MNEMONIC_NOOP: &str = "noop";

/// Mnemonic of the add-to-X instruction.
pub const MNEMONIC_ADDX: &str = "addx";

/// A decoded instruction.
///
/// Instructions are immutable once decoded; the simulator reads them from a
/// [`Program`](crate::isa::Program) by index and never rewrites them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Do nothing for one cycle.
    Noop,
    /// Add the signed delta to `X` once the instruction completes.
    AddX(i64),
}

impl Instruction {
    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Noop => MNEMONIC_NOOP,
            Self::AddX(_) => MNEMONIC_ADDX,
        }
    }

    /// Number of cycles the instruction occupies with the default timing.
    pub const fn latency(self) -> u32 {
        match self {
            Self::Noop => NOOP_LATENCY,
            Self::AddX(_) => ADDX_LATENCY,
        }
    }

    /// Returns `true` for instructions that span more than one cycle and
    /// therefore count ticks while in flight.
    pub const fn is_multi_cycle(self) -> bool {
        matches!(self, Self::AddX(_))
    }
}

/// Summed cycle cost of a sequence of instructions under the default timing.
///
/// Useful for checking up front whether a program fits a budget.
pub fn total_latency<'a>(instructions: impl IntoIterator<Item = &'a Instruction>) -> u64 {
    instructions
        .into_iter()
        .map(|inst| u64::from(inst.latency()))
        .sum()
}
