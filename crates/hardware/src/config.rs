//! Configuration system for the simulator.
//!
//! This module defines all configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline device constants (reset value, latencies, CRT geometry).
//! 2. **Structures:** Hierarchical config for general, CPU, run policy, signal sampler, and CRT.
//! 3. **Enums:** Policy for programs that outlast the cycle budget.
//!
//! Configuration is read from JSON (`--config` on the CLI) or built with `Config::default()`.
//! Every field is optional in the JSON document; unknown keys are rejected so a
//! misspelt setting cannot silently fall back to its default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants;
use crate::common::error::{ConfigError, Error, Result};

/// Default configuration constants for the simulator.
///
/// These mirror [`crate::common::constants`] so that the serde default hooks
/// below have a single place to read from.
mod defaults {
    use crate::common::constants;

    /// Reset value of the `X` register.
    pub const INITIAL_X: i64 = constants::INITIAL_X;

    /// Cycles an `addx` occupies before retiring.
    pub const ADDX_LATENCY: u32 = constants::ADDX_LATENCY;

    /// Budget for a signal-strength run.
    pub const SIGNAL_BUDGET: u64 = constants::SIGNAL_BUDGET;

    /// CRT width in pixels.
    pub const CRT_WIDTH: usize = constants::CRT_WIDTH;

    /// CRT height in rows.
    pub const CRT_HEIGHT: usize = constants::CRT_HEIGHT;

    /// Sprite half-width.
    pub const SPRITE_REACH: u64 = constants::SPRITE_REACH;

    /// Lit pixel character.
    pub const LIT: char = constants::LIT_CHAR;

    /// Dark pixel character.
    pub const DARK: char = constants::DARK_CHAR;
}

/// What to do when the cycle budget runs out before the program does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ExcessPolicy {
    /// Stop at the budget and leave the remaining instructions unexecuted.
    ///
    /// A signal-strength run over a full-frame program relies on this.
    #[default]
    Truncate,
    /// Fail with [`SimError::ProgramNotDrained`](crate::common::SimError::ProgramNotDrained).
    Reject,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use clocksim_core::config::{Config, ExcessPolicy};
///
/// let config = Config::default();
/// assert_eq!(config.cpu.initial_x, 1);
/// assert_eq!(config.crt.budget(), 240);
///
/// let json = r#"{
///     "cpu": { "initial_x": 5 },
///     "run": { "excess": "Reject" },
///     "crt": { "width": 20, "height": 2, "lit": "@" }
/// }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.cpu.initial_x, 5);
/// assert_eq!(config.cpu.addx_latency, 2);
/// assert_eq!(config.run.excess, ExcessPolicy::Reject);
/// assert_eq!(config.crt.budget(), 40);
/// assert_eq!(config.crt.lit, '@');
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// CPU reset state and timing.
    #[serde(default)]
    pub cpu: CpuConfig,
    /// Run termination policy.
    #[serde(default)]
    pub run: RunConfig,
    /// Signal-strength sampler (part one).
    #[serde(default)]
    pub signal: SignalConfig,
    /// CRT display (part two).
    #[serde(default)]
    pub crt: CrtConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the document is not valid JSON, a field
    /// has the wrong type or a key is unknown, and [`Error::Config`] when
    /// [`Config::validate`] rejects the values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values serde cannot: the CRT needs a non-empty frame whose
    /// pixel count fits the cycle counter.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.crt.validate()
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Json`] when it does not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log every cycle at `trace` level regardless of `RUST_LOG`.
    #[serde(default)]
    pub trace: bool,
}

/// CPU reset state and instruction timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CpuConfig {
    /// Value of `X` at reset.
    #[serde(default = "CpuConfig::default_initial_x")]
    pub initial_x: i64,

    /// Cycles an `addx` takes. Clamped to at least 1 when the CPU is built.
    #[serde(default = "CpuConfig::default_addx_latency")]
    pub addx_latency: u32,
}

impl CpuConfig {
    fn default_initial_x() -> i64 {
        defaults::INITIAL_X
    }

    fn default_addx_latency() -> u32 {
        defaults::ADDX_LATENCY
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            initial_x: defaults::INITIAL_X,
            addx_latency: defaults::ADDX_LATENCY,
        }
    }
}

/// Run termination policy.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Handling of instructions left over when the budget is spent.
    #[serde(default)]
    pub excess: ExcessPolicy,
}

/// Signal-strength sampler settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalConfig {
    /// Number of cycles to run.
    #[serde(default = "SignalConfig::default_budget")]
    pub budget: u64,

    /// Cycles at which `X * cycle` is added to the total.
    #[serde(default = "SignalConfig::default_sample_cycles")]
    pub sample_cycles: Vec<u64>,
}

impl SignalConfig {
    fn default_budget() -> u64 {
        defaults::SIGNAL_BUDGET
    }

    fn default_sample_cycles() -> Vec<u64> {
        constants::SAMPLE_CYCLES.to_vec()
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            budget: Self::default_budget(),
            sample_cycles: Self::default_sample_cycles(),
        }
    }
}

/// CRT display settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrtConfig {
    /// Pixels per row.
    #[serde(default = "CrtConfig::default_width")]
    pub width: usize,

    /// Number of rows.
    #[serde(default = "CrtConfig::default_height")]
    pub height: usize,

    /// A pixel is lit when `|x - pos| <= sprite_reach`.
    #[serde(default = "CrtConfig::default_sprite_reach")]
    pub sprite_reach: u64,

    /// Character for a lit pixel.
    #[serde(default = "CrtConfig::default_lit")]
    pub lit: char,

    /// Character for a dark pixel.
    #[serde(default = "CrtConfig::default_dark")]
    pub dark: char,
}

impl CrtConfig {
    /// Number of cycles needed to draw one full frame.
    ///
    /// Saturates for geometries [`CrtConfig::validate`] would reject.
    pub const fn budget(&self) -> u64 {
        (self.width as u64).saturating_mul(self.height as u64)
    }

    /// Rejects zero dimensions and frames whose pixel count overflows.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroDimension`] or [`ConfigError::FrameTooLarge`].
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { field: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { field: "height" });
        }
        match self.width.checked_mul(self.height).map(u64::try_from) {
            Some(Ok(_)) => Ok(()),
            _ => Err(ConfigError::FrameTooLarge {
                width: self.width,
                height: self.height,
            }),
        }
    }

    fn default_width() -> usize {
        defaults::CRT_WIDTH
    }

    fn default_height() -> usize {
        defaults::CRT_HEIGHT
    }

    fn default_sprite_reach() -> u64 {
        defaults::SPRITE_REACH
    }

    fn default_lit() -> char {
        defaults::LIT
    }

    fn default_dark() -> char {
        defaults::DARK
    }
}

impl Default for CrtConfig {
    fn default() -> Self {
        Self {
            width: defaults::CRT_WIDTH,
            height: defaults::CRT_HEIGHT,
            sprite_reach: defaults::SPRITE_REACH,
            lit: defaults::LIT,
            dark: defaults::DARK,
        }
    }
}
