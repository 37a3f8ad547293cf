//! Devices attached to the CPU's observation point.
//!
//! Every cycle the simulator hands the cycle number and the current value of
//! `X` to an [`Observer`]. The two devices of the handheld are:
//! 1. **Signal sampler:** Sums `cycle * X` at fixed sampling cycles ([`SignalSampler`]).
//! 2. **CRT:** Draws one pixel per cycle, lit when the sprite at `X` covers it ([`Crt`]).
//!
//! Closures `FnMut(u64, i64)` are observers too, and a pair of observers is
//! itself an observer that forwards to both halves in order.

/// Cathode-ray tube display and frame grid.
pub mod crt;

/// Signal-strength sampler.
pub mod signal;

pub use crt::{Crt, Frame, Glyph, reshape};
pub use signal::{Sample, SignalSampler};

/// Per-cycle observation capability.
///
/// `observe` is called exactly once per cycle, after the instruction for that
/// cycle has been fetched and before any `addx` completing on it updates `X`.
pub trait Observer {
    /// Observes the register during `cycle` (1-based).
    fn observe(&mut self, cycle: u64, x: i64);
}

impl<F> Observer for F
where
    F: FnMut(u64, i64),
{
    fn observe(&mut self, cycle: u64, x: i64) {
        self(cycle, x);
    }
}

impl<A, B> Observer for (A, B)
where
    A: Observer,
    B: Observer,
{
    fn observe(&mut self, cycle: u64, x: i64) {
        self.0.observe(cycle, x);
        self.1.observe(cycle, x);
    }
}
