//! Main Execution Steps.
//!
//! This module implements the two halves of a clock cycle. It performs the following:
//! 1. **Fetch:** When nothing is in flight, the next instruction is taken from the program.
//! 2. **Tick Counting:** Multi-cycle instructions count the cycles they have occupied.
//! 3. **Retire:** Completed instructions apply their effect to `X` and leave the CPU idle.
//!
//! The observation point sits between [`Cpu::pre_tick`] and [`Cpu::post_tick`], so
//! anything reading `X` during a cycle sees the value from before an `addx` that
//! completes on that same cycle.

use tracing::trace;

use super::Cpu;
use crate::common::error::SimError;
use crate::isa::{Instruction, Program};

impl Cpu {
    /// Pre-tick: fetch if idle, then count the cycle.
    ///
    /// # Arguments
    ///
    /// * `program` - Program being executed.
    /// * `cycle` - 1-based number of the cycle being started.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ProgramExhausted`] when a fetch is needed and the
    /// program has no instructions left.
    pub fn pre_tick(&mut self, program: &Program, cycle: u64) -> Result<(), SimError> {
        let inst = match self.in_flight {
            Some(inst) => inst,
            None => {
                let inst = program
                    .get(self.cursor)
                    .ok_or(SimError::ProgramExhausted { cycle })?;
                trace!(cycle, index = self.cursor, inst = %inst, "fetch");
                self.cursor += 1;
                self.ticks = 0;
                self.in_flight = Some(inst);
                inst
            }
        };

        if inst.is_multi_cycle() {
            self.ticks += 1;
        }
        self.stats.cycles += 1;
        Ok(())
    }

    /// Post-tick: retire the in-flight instruction if it has completed.
    ///
    /// Returns the retired instruction, or `None` when an instruction is still
    /// mid-flight (or nothing was in flight at all).
    pub fn post_tick(&mut self) -> Option<Instruction> {
        let inst = self.in_flight?;
        if inst.is_multi_cycle() && self.ticks < self.latency_of(inst) {
            self.stats.stall_cycles += 1;
            return None;
        }

        if let Instruction::AddX(delta) = inst {
            self.x = self.x.saturating_add(delta);
        }
        self.in_flight = None;
        self.ticks = 0;
        self.stats.record_retire(inst);
        Some(inst)
    }

    /// Number of instructions not yet retired: the in-flight one, if any,
    /// plus everything after the cursor.
    pub fn pending(&self, program: &Program) -> usize {
        program.len().saturating_sub(self.cursor) + usize::from(self.in_flight.is_some())
    }
}
