//! Fault and Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Faults:** Conditions that halt the fetch-decode-execute loop (bad address, bad command,
//!    bad register, unknown opcode).
//! 2. **Kernel Errors:** Misuse of the single-shot start notification.
//! 3. **Harness Errors:** Program image loading and configuration failures.
//!
//! Faults are never raised across the memory boundary; memory only reports a response status
//! and the processor turns a non-`Ok` status into a [`Fault`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::constants::{INSTRUCTION_WIDTH, MAX_MEMORY_SIZE};
use super::data::AccessType;
use crate::isa::opcodes::Mnemonic;

/// Terminal condition of the processor loop.
///
/// Every variant carries enough context (address, register, opcode) to diagnose the fault from
/// the log line alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// A transaction range fell outside memory.
    #[error("{access} at address {addr:#04x} returned address error")]
    AddressError {
        /// Phase that issued the transaction.
        access: AccessType,
        /// Start address of the rejected range.
        addr: u64,
    },

    /// Memory rejected the transaction command.
    #[error("{access} at address {addr:#04x} returned command error")]
    CommandError {
        /// Phase that issued the transaction.
        access: AccessType,
        /// Start address of the rejected transaction.
        addr: u64,
    },

    /// An instruction named a register outside the register file.
    #[error("{mnemonic}: invalid register R{reg}")]
    InvalidRegister {
        /// Instruction that referenced the register.
        mnemonic: Mnemonic,
        /// Raw register index from the instruction word.
        reg: u8,
    },

    /// The opcode byte matches no defined instruction.
    #[error("unknown instruction {opcode:#04x} at pc {pc:#04x}")]
    UnknownOpcode {
        /// Address of the offending instruction.
        pc: u16,
        /// Raw opcode byte.
        opcode: u8,
    },
}

/// Errors raised by the simulation kernel primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum KernelError {
    /// The start trigger was dropped before it fired.
    #[error("start signal dropped before it fired")]
    StartSignalDropped,
}

/// Errors raised while placing a program image into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image does not fit in memory at the requested offset.
    #[error("image of {len} bytes at offset {offset:#x} exceeds memory of {capacity} bytes")]
    OutOfBounds {
        /// Requested start offset.
        offset: usize,
        /// Image length in bytes.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// The image file could not be read.
    #[error("could not read image '{}': {source}", .path.display())]
    Io {
        /// Path of the image file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors raised while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`crate::Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("could not read configuration '{}': {source}", .path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The memory size is outside the supported range.
    #[error("memory size {0} is outside {min}..={max}", min = INSTRUCTION_WIDTH, max = MAX_MEMORY_SIZE)]
    MemorySize(usize),
}
