//! Simulation driver and program loading.
//!
//! Provides the cycle-by-cycle [`Simulator`], the canned signal-strength and
//! CRT runs, and utilities for loading programs from disk.

pub mod loader;
pub mod simulator;

pub use simulator::{Outcome, RunSummary, Simulator, render, signal_strength};
