//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the complete execution state of
//! the device. It holds:
//! 1. **Register State:** The single `X` register and its reset value.
//! 2. **Instruction State:** The in-flight instruction, its elapsed ticks, and the
//!    fetch cursor into the program.
//! 3. **Statistics:** Per-run counters in [`SimStats`].

/// Fetch, tick, and retire steps.
pub mod execution;

use crate::common::constants::NOOP_LATENCY;
use crate::config::Config;
use crate::isa::Instruction;
use crate::stats::SimStats;

/// Execution state of the device.
///
/// Lives for one run; [`Cpu::reset`] returns it to the power-on state.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// The `X` register.
    pub x: i64,
    /// Instruction currently executing, if any.
    pub in_flight: Option<Instruction>,
    /// Ticks elapsed on the in-flight instruction.
    pub ticks: u32,
    /// Index of the next instruction to fetch.
    pub cursor: usize,
    /// Cycles an `addx` takes to retire.
    pub addx_latency: u32,
    /// Performance statistics.
    pub stats: SimStats,
    initial_x: i64,
}

impl Cpu {
    /// Creates a CPU in its reset state.
    pub fn new(config: &Config) -> Self {
        let initial_x = config.cpu.initial_x;
        Self {
            x: initial_x,
            in_flight: None,
            ticks: 0,
            cursor: 0,
            addx_latency: config.cpu.addx_latency.max(1),
            stats: SimStats::new(initial_x),
            initial_x,
        }
    }

    /// Returns the CPU to its reset state, keeping its configuration.
    pub fn reset(&mut self) {
        self.x = self.initial_x;
        self.in_flight = None;
        self.ticks = 0;
        self.cursor = 0;
        self.stats = SimStats::new(self.initial_x);
    }

    /// Value `X` takes at reset.
    pub const fn initial_x(&self) -> i64 {
        self.initial_x
    }

    /// Cycles `inst` occupies on this CPU.
    pub const fn latency_of(&self, inst: Instruction) -> u32 {
        match inst {
            Instruction::Noop => NOOP_LATENCY,
            Instruction::AddX(_) => self.addx_latency,
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
