//! Program Decoder.
//!
//! This module turns program text into [`Instruction`]s. It performs:
//! 1. **Tokenising:** Each line is split on ASCII whitespace.
//! 2. **Mnemonic dispatch:** The first token selects the instruction.
//! 3. **Operand parsing:** `addx` takes exactly one signed decimal operand;
//!    `noop` takes none.
//!
//! [`decode_program`] skips blank lines but keeps physical line numbers in its
//! errors so they point at the right place in the input file.

use std::str::FromStr;

use crate::common::error::ParseError;
use crate::isa::Program;
use crate::isa::instruction::{Instruction, MNEMONIC_ADDX, MNEMONIC_NOOP};

/// Decodes a single line.
///
/// # Arguments
///
/// * `text` - The line, without its newline.
/// * `line` - 1-based line number used in error reports.
///
/// # Errors
///
/// Returns a [`ParseError`] for blank lines, unknown mnemonics, missing or
/// non-integer operands, and surplus tokens.
pub fn decode_line(text: &str, line: usize) -> Result<Instruction, ParseError> {
    let mut tokens = text.split_ascii_whitespace();
    let Some(mnemonic) = tokens.next() else {
        return Err(ParseError::Empty { line });
    };

    let inst = match mnemonic {
        MNEMONIC_NOOP => Instruction::Noop,
        MNEMONIC_ADDX => {
            let operand = tokens.next().ok_or(ParseError::MissingOperand {
                line,
                mnemonic: MNEMONIC_ADDX,
            })?;
            let delta = operand
                .parse::<i64>()
                .map_err(|source| ParseError::InvalidOperand {
                    line,
                    operand: operand.to_owned(),
                    source,
                })?;
            Instruction::AddX(delta)
        }
        other => {
            return Err(ParseError::UnknownMnemonic {
                line,
                mnemonic: other.to_owned(),
            });
        }
    };

    if let Some(extra) = tokens.next() {
        return Err(ParseError::UnexpectedOperand {
            line,
            mnemonic: inst.mnemonic(),
            operand: extra.to_owned(),
        });
    }
    Ok(inst)
}

/// Decodes a whole program listing, one instruction per line.
///
/// # Errors
///
/// Stops at the first malformed line and returns its [`ParseError`].
pub fn decode_program(text: &str) -> Result<Program, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| decode_line(line, idx + 1))
        .collect::<Result<Vec<_>, _>>()
        .map(Program::new)
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_line(s, 1)
    }
}

impl FromStr for Program {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_program(s)
    }
}
