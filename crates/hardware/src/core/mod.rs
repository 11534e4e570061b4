//! Core processor implementation.
//!
//! This module contains the processor and its architectural state.

/// Architecture-visible state (register file).
pub mod arch;

/// Processor state machine and execution loop.
pub mod cpu;

pub use self::cpu::{CpuState, HaltReason, Processor};
