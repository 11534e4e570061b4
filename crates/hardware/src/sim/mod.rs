//! Simulation utilities and program loading.
//!
//! Provides the scheduling primitives the processor waits on, utilities for loading programs
//! into memory, the top-level simulator, and the reference test bench.

/// Single-shot start notification.
pub mod kernel;

/// Program encoding and image loading.
pub mod loader;

/// Processor + memory container.
pub mod simulator;

/// Reference scenario harness.
pub mod testbench;

pub use kernel::{StartSignal, StartTrigger, start_signal};
pub use simulator::Simulator;
pub use testbench::TestBench;
