//! Byte-addressable system memory.
//!
//! This module implements the memory target. It provides:
//! 1. **Storage:** A fixed-size byte array filled with the power-on pattern `(i mod 3) + 5`.
//! 2. **Transport:** Bounds-checked read/write servicing of transactions.
//! 3. **Harness access:** Raw indexed access and image loading for program setup, used before
//!    the processor is started.

use std::ops::{Index, IndexMut, Range};

use tracing::warn;

use super::traits::Transport;
use super::transaction::{Command, ResponseStatus, Transaction};
use crate::common::constants::{MEMORY_SIZE, init_pattern};
use crate::common::error::LoadError;

/// System memory.
///
/// Capacity is fixed at construction; storage is only mutated by a successful write
/// transaction or by the harness back-door before the simulation starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: Box<[u8]>,
}

impl Memory {
    /// Creates a memory of [`MEMORY_SIZE`] bytes.
    pub fn new() -> Self {
        Self::with_size(MEMORY_SIZE)
    }

    /// Creates a memory of `size` bytes filled with the power-on pattern.
    pub fn with_size(size: usize) -> Self {
        Self {
            cells: (0..size).map(init_pattern).collect(),
        }
    }

    /// Returns the capacity in bytes.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for a zero-capacity memory.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the raw contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// Used by the harness to place programs and initial data; bypasses the transaction
    /// interface.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::OutOfBounds`] if the image does not fit; memory is left untouched.
    pub fn load(&mut self, data: &[u8], offset: usize) -> Result<(), LoadError> {
        let capacity = self.len();
        let range = offset
            .checked_add(data.len())
            .filter(|&end| end <= capacity)
            .map(|end| offset..end)
            .ok_or(LoadError::OutOfBounds {
                offset,
                len: data.len(),
                capacity,
            })?;
        self.cells[range].copy_from_slice(data);
        Ok(())
    }

    /// Resolves `[addr, addr + len)` to a storage range, or `None` if any byte is out of bounds.
    fn range(&self, addr: u64, len: usize) -> Option<Range<usize>> {
        let start = usize::try_from(addr).ok()?;
        let end = start.checked_add(len)?;
        (end <= self.cells.len()).then_some(start..end)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for Memory {
    fn b_transport(&mut self, trans: &mut Transaction<'_>) {
        // Bounds are checked before the command so a bad range never touches storage.
        let Some(range) = self.range(trans.address(), trans.data_length()) else {
            trans.set_status(ResponseStatus::AddressError);
            return;
        };

        match trans.command() {
            Command::Read => {
                trans.data_mut().copy_from_slice(&self.cells[range]);
                trans.set_status(ResponseStatus::Ok);
            }
            Command::Write => {
                self.cells[range].copy_from_slice(trans.data());
                trans.set_status(ResponseStatus::Ok);
            }
            Command::Ignore => {
                warn!(addr = trans.address(), "memory: unsupported command");
                trans.set_status(ResponseStatus::CommandError);
            }
        }
    }
}

impl Index<usize> for Memory {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Memory {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cells[index]
    }
}
