//! General-Purpose Register File.
//!
//! This module implements the processor's register file. It performs the following:
//! 1. **Storage:** Maintains four 8-bit registers (`R0`-`R3`), zero at power-on.
//! 2. **Index Validation:** Maps raw instruction fields to register indices.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use tracing::debug;

use crate::common::constants::REG_COUNT;

/// General-purpose register file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REG_COUNT],
}

impl RegisterFile {
    /// Creates a register file with all registers set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REG_COUNT],
        }
    }

    /// Maps a raw register field to an index, or `None` if it names no register.
    #[inline]
    pub const fn index(raw: u8) -> Option<usize> {
        let idx = raw as usize;
        if idx < REG_COUNT { Some(idx) } else { None }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-3), as returned by [`RegisterFile::index`].
    pub const fn read(&self, idx: usize) -> u8 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-3), as returned by [`RegisterFile::index`].
    /// * `val` - The 8-bit value to write.
    pub const fn write(&mut self, idx: usize, val: u8) {
        self.regs[idx] = val;
    }

    /// Returns a copy of all register values.
    pub const fn snapshot(&self) -> [u8; REG_COUNT] {
        self.regs
    }

    /// Logs all registers at debug level.
    pub fn dump(&self) {
        for (i, val) in self.regs.iter().enumerate() {
            debug!("R{i}={val:#04x} ({val})");
        }
    }
}
