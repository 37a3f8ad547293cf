//! Program Loader.
//!
//! This module reads input files from disk. It performs:
//! 1. **File loading:** Reads a listing into memory, mapping I/O failures to [`Error::Io`].
//! 2. **Decoding:** Turns the text into a [`Program`], reporting the first bad line.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::{Error, Result};
use crate::isa::{Program, decode_program};

/// Reads a text file into a string.
///
/// # Errors
///
/// Returns [`Error::Io`] carrying the path when the file cannot be read.
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and decodes a program listing.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`] if a
/// line is malformed.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let text = load_text(path)?;
    let program = decode_program(&text)?;
    debug!(
        path = %path.display(),
        instructions = program.len(),
        cycles = program.total_latency(),
        "program loaded"
    );
    Ok(program)
}
