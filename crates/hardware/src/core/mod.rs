//! Core processor implementation.
//!
//! This module contains the CPU: its execution state and the per-cycle fetch,
//! tick, and retire steps the simulator drives.

/// CPU state and execution steps.
pub mod cpu;

pub use self::cpu::Cpu;
