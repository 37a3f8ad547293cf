//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Reset values, latencies, sampling cycles, and CRT geometry.
//! 2. **Error Handling:** Parse, simulation, droplet, config, and crate-level error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{ADDX_LATENCY, CRT_HEIGHT, CRT_WIDTH, INITIAL_X, SAMPLE_CYCLES};
pub use error::{ConfigError, DropletError, Error, ParseError, Result, SimError};
