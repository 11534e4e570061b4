//! Memory Access Types.
//!
//! This module defines the classification of transactions issued by the processor.
//! These types are used for the following:
//! 1. **Fault Reporting:** Naming the phase (fetch, load, store) that hit a bad response.
//! 2. **Statistics Tracking:** Categorizing transactions for the run summary.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when a transaction comes back with an error status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// The 4-byte read issued at the program counter at the top of every iteration.
    Fetch,

    /// Data read access.
    ///
    /// The 1-byte read issued by `LOAD`.
    Read,

    /// Data write access.
    ///
    /// The 1-byte write issued by `STORE`.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => f.write_str("instruction fetch"),
            Self::Read => f.write_str("load"),
            Self::Write => f.write_str("store"),
        }
    }
}
