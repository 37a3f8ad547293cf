//! Signal-strength sampler.
//!
//! The sampler samples `X` on a fixed set of cycles and accumulates the signal
//! strength, `cycle * X`, of each sample.

use tracing::debug;

use super::Observer;
use crate::common::constants::SAMPLE_CYCLES;

/// One recorded sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Cycle the sample was taken on.
    pub cycle: u64,
    /// Value of `X` during that cycle.
    pub x: i64,
    /// `cycle * x`.
    pub strength: i64,
}

/// Accumulates signal strength at the sampling cycles.
#[derive(Debug, Clone)]
pub struct SignalSampler {
    sample_cycles: Vec<u64>,
    samples: Vec<Sample>,
    total: i64,
}

impl SignalSampler {
    /// Creates a sampler reading `X` on the given cycles.
    pub fn new(sample_cycles: impl IntoIterator<Item = u64>) -> Self {
        let mut sample_cycles: Vec<u64> = sample_cycles.into_iter().collect();
        sample_cycles.sort_unstable();
        sample_cycles.dedup();
        Self {
            sample_cycles,
            samples: Vec::new(),
            total: 0,
        }
    }

    /// Sum of all signal strengths recorded so far.
    pub const fn total(&self) -> i64 {
        self.total
    }

    /// Samples recorded so far, in cycle order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Cycles this sampler samples on, ascending.
    pub fn sample_cycles(&self) -> &[u64] {
        &self.sample_cycles
    }

    /// Discards recorded samples.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.total = 0;
    }
}

impl Default for SignalSampler {
    fn default() -> Self {
        Self::new(SAMPLE_CYCLES)
    }
}

impl Observer for SignalSampler {
    fn observe(&mut self, cycle: u64, x: i64) {
        if self.sample_cycles.binary_search(&cycle).is_err() {
            return;
        }
        let strength = (cycle as i64).saturating_mul(x);
        debug!(cycle, x, strength, "signal sample");
        self.total = self.total.saturating_add(strength);
        self.samples.push(Sample {
            cycle,
            x,
            strength,
        });
    }
}
