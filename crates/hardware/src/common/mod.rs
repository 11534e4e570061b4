//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by memory, ISA, and processor. It includes:
//! 1. **Constants:** Memory capacity, register count, and instruction width.
//! 2. **Memory Access:** Classification of transactions (Fetch/Read/Write).
//! 3. **Error Handling:** Processor faults, kernel errors, and harness errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and fault definitions.
pub mod error;

pub use constants::{INSTRUCTION_WIDTH, MEMORY_SIZE, REG_COUNT};
pub use data::AccessType;
pub use error::{ConfigError, Fault, KernelError, LoadError};
