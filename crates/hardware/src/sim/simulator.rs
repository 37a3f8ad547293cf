//! Simulator: owns the CPU and the program side-by-side.
//!
//! One clock cycle is `pre_tick` (fetch + tick count), the observation, then
//! `post_tick` (retire). The observer is borrowed per call, so the same
//! simulator can drive a signal sampler, a CRT, or both at once.

use tracing::{debug, trace, warn};

use crate::common::error::SimError;
use crate::config::{Config, ExcessPolicy};
use crate::core::Cpu;
use crate::devices::{Crt, Frame, Observer, SignalSampler};
use crate::isa::Program;
use crate::stats::SimStats;

/// What a completed run left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles executed in total.
    pub cycles: u64,
    /// Instructions retired in total.
    pub retired: u64,
    /// Value of `X` after the last cycle.
    pub final_x: i64,
    /// Instructions never fetched.
    pub unexecuted: usize,
    /// Whether an instruction was still mid-flight when the budget ran out.
    pub in_flight: bool,
}

impl RunSummary {
    /// Instructions the run did not finish, the in-flight one included.
    pub const fn remaining(&self) -> usize {
        self.unexecuted + self.in_flight as usize
    }
}

/// Top-level simulator: CPU execution state + the program it runs.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// CPU execution state.
    pub cpu: Cpu,
    program: Program,
    excess: ExcessPolicy,
}

impl Simulator {
    /// Creates a simulator for `program` with the given configuration.
    pub fn new(program: Program, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            program,
            excess: config.run.excess,
        }
    }

    /// Program being executed.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Cycles completed so far.
    pub const fn cycle(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Current value of `X`.
    pub const fn x(&self) -> i64 {
        self.cpu.x
    }

    /// Statistics for the run so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Returns `true` once every instruction has been fetched and retired.
    pub fn is_drained(&self) -> bool {
        self.cpu.pending(&self.program) == 0
    }

    /// Rewinds to cycle zero with `X` at its reset value.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ProgramExhausted`] when the cycle needs a fetch and
    /// the program has run out. The CPU is left unchanged in that case.
    pub fn tick<O>(&mut self, observer: &mut O) -> Result<(), SimError>
    where
        O: Observer + ?Sized,
    {
        let cycle = self.cycle() + 1;
        self.cpu.pre_tick(&self.program, cycle)?;

        let x = self.cpu.x;
        trace!(cycle, x, ticks = self.cpu.ticks, "observe");
        self.cpu.stats.record_x(x);
        observer.observe(cycle, x);

        if let Some(inst) = self.cpu.post_tick() {
            trace!(cycle, inst = %inst, x = self.cpu.x, "retire");
        }
        Ok(())
    }

    /// Runs until `budget` cycles have elapsed in total.
    ///
    /// Cycles already executed count towards the budget, so calling `run`
    /// with a budget at or below [`Simulator::cycle`] executes nothing.
    ///
    /// # Errors
    ///
    /// * [`SimError::ProgramExhausted`] if the program ends before the budget.
    /// * [`SimError::ProgramNotDrained`] if instructions remain afterwards and
    ///   the run policy is [`ExcessPolicy::Reject`].
    pub fn run<O>(&mut self, budget: u64, observer: &mut O) -> Result<RunSummary, SimError>
    where
        O: Observer + ?Sized,
    {
        debug!(
            budget,
            instructions = self.program.len(),
            start = self.cycle(),
            "run start"
        );
        while self.cycle() < budget {
            self.tick(observer)?;
        }

        let summary = self.summary();
        let remaining = summary.remaining();
        if remaining > 0 {
            match self.excess {
                ExcessPolicy::Truncate => {
                    warn!(remaining, budget, "cycle budget spent before program end");
                }
                ExcessPolicy::Reject => return Err(SimError::ProgramNotDrained { remaining }),
            }
        }
        debug!(
            cycles = summary.cycles,
            retired = summary.retired,
            final_x = summary.final_x,
            "run end"
        );
        Ok(summary)
    }

    /// Snapshot of the run so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            cycles: self.cycle(),
            retired: self.cpu.stats.instructions_retired,
            final_x: self.cpu.x,
            unexecuted: self.program.len().saturating_sub(self.cpu.cursor),
            in_flight: self.cpu.in_flight.is_some(),
        }
    }
}

/// Result of one of the canned runs.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    /// The answer.
    pub value: T,
    /// How the run ended.
    pub summary: RunSummary,
    /// Statistics collected during the run.
    pub stats: SimStats,
}

/// Runs `program` through a [`SignalSampler`] for `config.signal.budget` cycles
/// and returns the summed signal strength.
///
/// # Errors
///
/// Propagates [`Simulator::run`] failures.
pub fn signal_strength(program: Program, config: &Config) -> Result<Outcome<i64>, SimError> {
    let mut sim = Simulator::new(program, config);
    let mut sampler = SignalSampler::new(config.signal.sample_cycles.iter().copied());
    let summary = sim.run(config.signal.budget, &mut sampler)?;
    Ok(Outcome {
        value: sampler.total(),
        summary,
        stats: sim.cpu.stats,
    })
}

/// Runs `program` through a [`Crt`] for one full frame and returns the image.
///
/// # Errors
///
/// Propagates [`Simulator::run`] failures.
pub fn render(program: Program, config: &Config) -> Result<Outcome<Frame>, SimError> {
    let mut sim = Simulator::new(program, config);
    let mut crt = Crt::new(config.crt.clone());
    let summary = sim.run(config.crt.budget(), &mut crt)?;
    Ok(Outcome {
        value: crt.into_frame(),
        summary,
        stats: sim.cpu.stats,
    })
}
