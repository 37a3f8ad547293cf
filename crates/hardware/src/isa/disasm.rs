//! Instruction Disassembler.
//!
//! Converts decoded instructions back into their textual form for debug
//! tracing, logging, and test diagnostics. The output of [`disassemble`]
//! decodes back to the same instruction.
//!
//! # Usage
//!
//! ```
//! use clocksim_core::isa::Instruction;
//! use clocksim_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(Instruction::AddX(-5)), "addx -5");
//! assert_eq!(Instruction::Noop.to_string(), "noop");
//! ```

use std::fmt;

use crate::isa::Program;
use crate::isa::instruction::Instruction;

/// Disassembles one instruction.
pub fn disassemble(inst: Instruction) -> String {
    inst.to_string()
}

/// Disassembles a program into a listing, one instruction per line.
pub fn listing(program: &Program) -> String {
    let mut out = String::new();
    for inst in program.iter() {
        out.push_str(&disassemble(*inst));
        out.push('\n');
    }
    out
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => f.write_str(self.mnemonic()),
            Self::AddX(delta) => write!(f, "{} {}", self.mnemonic(), delta),
        }
    }
}
