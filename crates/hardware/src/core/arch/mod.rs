//! Architectural state.
//!
//! This module contains the state visible to programs:
//! 1. **GPRs:** The four-entry 8-bit register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::RegisterFile;
