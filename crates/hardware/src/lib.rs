//! Minimal von-Neumann machine simulator library.
//!
//! This crate implements a single processor that reaches a shared byte-addressable memory only
//! through blocking request/response transactions:
//! 1. **Memory:** A fixed-size byte store answering read/write transactions with bounds checks.
//! 2. **ISA:** Four fixed-width instructions (`END`, `LOAD`, `ADD`, `STORE`) and their decoder.
//! 3. **Core:** A four-register processor running a fetch-decode-execute loop that halts on
//!    `END` or on the first fault.
//! 4. **Simulation:** The single-shot start notification, program loader, and test bench.
//! 5. **Configuration & statistics:** JSON configuration and per-run counters.

/// Common types and constants (sizes, access types, faults, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// Processor (register file, state machine, execution loop).
pub mod core;
/// Instruction set (opcodes, instruction type, decode, disassembly).
pub mod isa;
/// Start notification, loader, simulator, and test bench.
pub mod sim;
/// Transaction protocol and memory.
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Processor type; holds registers, program counter, and run state.
pub use crate::core::Processor;
/// Top-level simulator (processor + memory).
pub use crate::sim::Simulator;
/// Memory target; construct with `Memory::new`.
pub use crate::soc::Memory;
