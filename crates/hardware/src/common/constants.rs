//! Global Machine Constants.
//!
//! This module defines the fixed architectural parameters of the machine. It includes:
//! 1. **Memory Constants:** Capacity and the power-on fill pattern of the byte store.
//! 2. **Register Constants:** Size of the general-purpose register file.
//! 3. **Instruction Constants:** Fixed instruction width used for fetch and PC advance.

/// Number of addressable byte cells in the default memory.
pub const MEMORY_SIZE: usize = 256;

/// Largest memory a 16-bit start address can reach.
pub const MAX_MEMORY_SIZE: usize = 1 << 16;

/// Number of general-purpose registers (`R0`-`R3`).
pub const REG_COUNT: usize = 4;

/// Width of every encoded instruction in bytes.
pub const INSTRUCTION_WIDTH: usize = 4;

/// Offset added to `i mod 3` when filling a fresh memory (cells read 5, 6, 7, 5, ...).
pub const INIT_PATTERN_BASE: u8 = 5;

/// Period of the power-on fill pattern.
pub const INIT_PATTERN_PERIOD: usize = 3;

/// Returns the power-on value of memory cell `index`.
#[inline]
pub const fn init_pattern(index: usize) -> u8 {
    (index % INIT_PATTERN_PERIOD) as u8 + INIT_PATTERN_BASE
}
