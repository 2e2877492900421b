//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline machine constants (initial stack pointer, opcode policy).
//! 2. **Structures:** `Config` with a `general` section, deserialized from JSON.
//!
//! Configuration is supplied as JSON (`--config`) or use `Config::default()`; every
//! field is optional and falls back to its default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{EXIT_LOAD, LoadError};

/// Default configuration constants for the emulator.
mod defaults {
    /// Initial stack pointer (`0xF4`).
    ///
    /// Leaves `0xF5`-`0xFF` free above the stack, the region LS-8 reserves for
    /// the interrupt vector table and key buffer.
    pub const INITIAL_SP: u8 = crate::common::constants::INITIAL_SP;

    /// Unknown non-ALU opcodes fault instead of being skipped.
    pub const STRICT_OPCODES: bool = true;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

/// General emulation settings and options.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Print a trace line for each executed instruction to stderr.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Treat unknown non-ALU opcodes as `IllegalInstruction` faults. When `false`
    /// they are skipped like no-ops.
    #[serde(default = "GeneralConfig::default_strict_opcodes")]
    pub strict_opcodes: bool,

    /// Initial value of the stack pointer (`R7`).
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl GeneralConfig {
    /// Returns the default unknown-opcode policy.
    const fn default_strict_opcodes() -> bool {
        defaults::STRICT_OPCODES
    }

    /// Returns the default initial stack pointer.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            strict_opcodes: defaults::STRICT_OPCODES,
            initial_sp: defaults::INITIAL_SP,
        }
    }
}

/// Configuration file failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The file is not valid configuration JSON.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Returns the process exit status for this failure.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Load(e) => e.exit_code(),
            Self::Parse(_) => EXIT_LOAD,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the file cannot be read and
    /// `ConfigError::Parse` if its contents are not valid configuration.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::from_io(path, source))?;
        Self::from_json(&text)
    }
}
