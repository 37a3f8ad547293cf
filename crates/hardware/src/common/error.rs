//! Error definitions.
//!
//! This module defines the failure modes of the simulator. It provides:
//! 1. **Parse Errors:** Malformed instruction lines, tagged with their line number.
//! 2. **Simulation Errors:** Programs that do not fit the requested cycle budget.
//! 3. **Droplet Errors:** Malformed `x,y,z` coordinate lines.
//! 4. **Config Errors:** Settings that parse but describe an impossible device.
//! 5. **Crate Error:** A single [`Error`] type wrapping all of the above plus I/O and
//!    JSON failures, so callers can propagate with `?`.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to decode one line of a program listing.
///
/// Line numbers are 1-based and refer to the physical line in the input,
/// blank lines included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line contained no tokens.
    #[error("line {line}: empty instruction")]
    Empty {
        /// Line number of the offending line.
        line: usize,
    },

    /// The first token is not a known mnemonic.
    #[error("line {line}: unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic {
        /// Line number of the offending line.
        line: usize,
        /// The token that failed to match.
        mnemonic: String,
    },

    /// An instruction that needs an operand was given none.
    #[error("line {line}: `{mnemonic}` requires an operand")]
    MissingOperand {
        /// Line number of the offending line.
        line: usize,
        /// Mnemonic of the instruction.
        mnemonic: &'static str,
    },

    /// The operand is not a signed integer.
    #[error("line {line}: invalid operand `{operand}`: {source}")]
    InvalidOperand {
        /// Line number of the offending line.
        line: usize,
        /// The operand text as written.
        operand: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// More tokens followed a complete instruction.
    #[error("line {line}: unexpected operand `{operand}` after `{mnemonic}`")]
    UnexpectedOperand {
        /// Line number of the offending line.
        line: usize,
        /// Mnemonic of the instruction.
        mnemonic: &'static str,
        /// The first surplus token.
        operand: String,
    },
}

impl ParseError {
    /// Returns the line number the error refers to.
    pub const fn line(&self) -> usize {
        match self {
            Self::Empty { line }
            | Self::UnknownMnemonic { line, .. }
            | Self::MissingOperand { line, .. }
            | Self::InvalidOperand { line, .. }
            | Self::UnexpectedOperand { line, .. } => *line,
        }
    }
}

/// A program did not match the cycle budget it was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// The simulator needed to fetch on `cycle` but the program had no
    /// instructions left.
    #[error("program exhausted: no instruction to fetch on cycle {cycle}")]
    ProgramExhausted {
        /// Cycle on which the fetch was attempted.
        cycle: u64,
    },

    /// The budget ran out with instructions still pending, and the run was
    /// configured to reject leftovers.
    #[error("program not drained: {remaining} instruction(s) left after the cycle budget")]
    ProgramNotDrained {
        /// Instructions fetched-but-unfinished or never fetched.
        remaining: usize,
    },
}

/// Failure to decode one `x,y,z` droplet line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropletError {
    /// The line did not split into exactly three fields.
    #[error("line {line}: expected 3 comma-separated coordinates, found {found}")]
    FieldCount {
        /// Line number of the offending line.
        line: usize,
        /// Number of fields present.
        found: usize,
    },

    /// A field is not an integer.
    #[error("line {line}: invalid coordinate `{field}`: {source}")]
    InvalidCoordinate {
        /// Line number of the offending line.
        line: usize,
        /// The field text as written.
        field: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },
}

/// A configuration value outside what the device can model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A CRT dimension was zero.
    #[error("crt.{field} must be at least 1")]
    ZeroDimension {
        /// Name of the offending field.
        field: &'static str,
    },

    /// `width * height` does not fit the cycle counter.
    #[error("crt frame of {width}x{height} pixels is too large")]
    FrameTooLarge {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },
}

/// Crate-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("i/o error on `{}`: {source}", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A program listing failed to decode.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A simulation run failed.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// A configuration parsed but failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A droplet listing failed to decode.
    #[error(transparent)]
    Droplet(#[from] DropletError),

    /// A JSON document (configuration or scatter export) failed to encode or decode.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
