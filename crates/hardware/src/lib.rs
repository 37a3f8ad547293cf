//! Handheld device simulator library.
//!
//! This crate implements a cycle-accurate simulator for a tiny CPU with a single
//! register `X` and its two attached devices:
//! 1. **ISA:** Decoding and disassembly of `noop` and `addx V`.
//! 2. **Core:** The CPU execution state and its fetch / tick / retire steps.
//! 3. **Devices:** The per-cycle [`Observer`](devices::Observer) seam, the signal-strength
//!    sampler, and the 40×6 CRT.
//! 4. **Simulation:** The clocked [`Simulator`], program loading, configuration, and statistics.
//! 5. **Droplets:** Surface-area analysis and scatter export for 3-D droplet scans.
//!
//! ```
//! use clocksim_core::{Config, Simulator};
//! use clocksim_core::devices::SignalSampler;
//!
//! let program = "noop\naddx 3\naddx -5\n".parse().unwrap();
//! let mut sim = Simulator::new(program, &Config::default());
//! let mut sampler = SignalSampler::new([5]);
//! let summary = sim.run(5, &mut sampler).unwrap();
//! assert_eq!(sampler.total(), 5 * 4);
//! assert_eq!(summary.final_x, -1);
//! ```

/// Common types and constants (limits, latencies, errors).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// CPU core (execution state, fetch / retire).
pub mod core;
/// Observers attached to the CPU (signal sampler, CRT).
pub mod devices;
/// Droplet scans (parsing, surface area, scatter export).
pub mod droplets;
/// Instruction set (instruction, decode, disassembly, program).
pub mod isa;
/// Simulator and program loader.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Crate-level error and result types.
pub use crate::common::{Error, Result};
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// CPU execution state.
pub use crate::core::Cpu;
/// Ordered instruction sequence.
pub use crate::isa::Program;
/// Cycle-by-cycle simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
