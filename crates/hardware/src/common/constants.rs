//! Global System Constants.
//!
//! This module defines the fixed parameters of the handheld device. It includes:
//! 1. **CPU Constants:** Reset value of the `X` register and instruction latencies.
//! 2. **Signal Constants:** The cycles sampled by the signal-strength sampler.
//! 3. **Display Constants:** CRT geometry, sprite reach, and glyph characters.

/// Value of the `X` register at reset.
pub const INITIAL_X: i64 = 1;

/// Cycles taken by a `noop` before it retires.
pub const NOOP_LATENCY: u32 = 1;

/// Cycles taken by an `addx` before its delta is applied.
pub const ADDX_LATENCY: u32 = 2;

/// Cycles at which the signal-strength sampler samples the register.
pub const SAMPLE_CYCLES: [u64; 6] = [20, 60, 100, 140, 180, 220];

/// Cycle budget for a signal-strength run (the last sampling cycle).
pub const SIGNAL_BUDGET: u64 = 220;

/// Width of the CRT in pixels.
pub const CRT_WIDTH: usize = 40;

/// Height of the CRT in rows.
pub const CRT_HEIGHT: usize = 6;

/// Cycle budget for drawing one full CRT frame.
pub const CRT_BUDGET: u64 = (CRT_WIDTH * CRT_HEIGHT) as u64;

/// Horizontal distance from the sprite centre that still lights a pixel.
///
/// The sprite is three pixels wide, so a pixel at `pos` is lit when
/// `|x - pos| <= 1`.
pub const SPRITE_REACH: u64 = 1;

/// Character drawn for a lit pixel.
pub const LIT_CHAR: char = '#';

/// Character drawn for a dark pixel.
pub const DARK_CHAR: char = '.';
