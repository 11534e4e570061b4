//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine constants (256-byte memory, entry address `0x21`).
//! 2. **Structures:** General run settings and memory sizing.
//! 3. **Loading:** JSON parsing with validation.
//!
//! Every field is optional in JSON; missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{INSTRUCTION_WIDTH, MAX_MEMORY_SIZE, MEMORY_SIZE};
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Entry address used by the reference test bench.
    pub const START_PC: u16 = 0x21;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use vnsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "start_pc": 16, "trace_instructions": true },
///     "memory": { "size_bytes": 128 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.start_pc, 16);
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.size_bytes, 128);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::MemorySize`] for an
    /// unsupported memory size.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a machine that can run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MemorySize`] if memory cannot hold one instruction or exceeds
    /// the 16-bit address space.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.memory.size_bytes;
        if size < INSTRUCTION_WIDTH || size > MAX_MEMORY_SIZE {
            return Err(ConfigError::MemorySize(size));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Entry address sent with the start notification.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u16,

    /// Log every decoded instruction and the final register file at debug level.
    #[serde(default)]
    pub trace_instructions: bool,
}

impl GeneralConfig {
    const fn default_start_pc() -> u16 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            trace_instructions: false,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Capacity in bytes; fixed for the lifetime of the memory.
    #[serde(default = "MemoryConfig::default_size_bytes")]
    pub size_bytes: usize,
}

impl MemoryConfig {
    const fn default_size_bytes() -> usize {
        MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_bytes: MEMORY_SIZE,
        }
    }
}
