//! Simulation statistics collection and reporting.
//!
//! This module tracks per-run metrics for the simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI).
//! 2. **Instruction mix:** Counts of retired `noop` and `addx` instructions.
//! 3. **Stalls:** Cycles spent waiting on multi-cycle `addx`.
//! 4. **Register:** Range of values `X` held when observed.

use std::fmt;
use std::time::Instant;

use crate::isa::Instruction;

/// Simulation statistics for one run.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of `noop` instructions retired.
    pub inst_noop: u64,
    /// Count of `addx` instructions retired.
    pub inst_addx: u64,

    /// Cycles that ended with a multi-cycle instruction still in flight.
    pub stall_cycles: u64,

    /// Smallest value of `X` seen at an observation point.
    pub x_min: i64,
    /// Largest value of `X` seen at an observation point.
    pub x_max: i64,
}

impl SimStats {
    /// Creates empty statistics for a CPU whose `X` starts at `initial_x`.
    pub fn new(initial_x: i64) -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_noop: 0,
            inst_addx: 0,
            stall_cycles: 0,
            x_min: initial_x,
            x_max: initial_x,
        }
    }

    /// Records a retired instruction.
    pub fn record_retire(&mut self, inst: Instruction) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Noop => self.inst_noop += 1,
            Instruction::AddX(_) => self.inst_addx += 1,
        }
    }

    /// Records the value of `X` seen at an observation point.
    pub fn record_x(&mut self, x: i64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
    }

    /// Cycles per retired instruction, or `0.0` if nothing retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new(crate::common::constants::INITIAL_X)
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"register"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "register"];

impl SimStats {
    /// Renders the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an empty
    /// slice selects all of them. Unknown names are ignored.
    pub fn report(&self, sections: &[String]) -> String {
        self.display(sections).to_string()
    }

    /// A [`fmt::Display`] view of the requested sections.
    pub const fn display<'a>(&'a self, sections: &'a [String]) -> StatsReport<'a> {
        StatsReport {
            stats: self,
            sections,
        }
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.display(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

/// Formatter for a selection of [`SimStats`] sections.
#[derive(Debug, Clone, Copy)]
pub struct StatsReport<'a> {
    stats: &'a SimStats,
    sections: &'a [String],
}

impl StatsReport<'_> {
    fn wants(&self, section: &str) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s == section)
    }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "==========================================================";
        const SEPARATOR: &str = "----------------------------------------------------------";

        let stats = self.stats;
        let cyc = stats.cycles.max(1) as f64;

        writeln!(f, "{RULE}")?;
        writeln!(f, "CLOCKSIM RUN STATISTICS")?;
        writeln!(f, "{RULE}")?;
        if self.wants("summary") {
            let seconds = stats.start_time.elapsed().as_secs_f64();
            let ipc = stats.instructions_retired as f64 / cyc;
            writeln!(f, "host_seconds             {seconds:.4} s")?;
            writeln!(f, "sim_cycles               {}", stats.cycles)?;
            writeln!(f, "sim_insts                {}", stats.instructions_retired)?;
            writeln!(f, "sim_ipc                  {ipc:.4}")?;
            writeln!(f, "sim_cpi                  {:.4}", stats.cpi())?;
            writeln!(
                f,
                "stalls.addx              {} ({:.2}%)",
                stats.stall_cycles,
                (stats.stall_cycles as f64 / cyc) * 100.0
            )?;
            writeln!(f, "{SEPARATOR}")?;
        }
        if self.wants("instruction_mix") {
            let total = stats.instructions_retired.max(1) as f64;
            writeln!(f, "INSTRUCTION MIX")?;
            writeln!(
                f,
                "  op.noop                {} ({:.2}%)",
                stats.inst_noop,
                (stats.inst_noop as f64 / total) * 100.0
            )?;
            writeln!(
                f,
                "  op.addx                {} ({:.2}%)",
                stats.inst_addx,
                (stats.inst_addx as f64 / total) * 100.0
            )?;
            writeln!(f, "{SEPARATOR}")?;
        }
        if self.wants("register") {
            writeln!(f, "REGISTER X")?;
            writeln!(f, "  x.min                  {}", stats.x_min)?;
            writeln!(f, "  x.max                  {}", stats.x_max)?;
        }
        writeln!(f, "{RULE}")
    }
}
