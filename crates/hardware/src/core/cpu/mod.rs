//! Processor Definition and Lifecycle.
//!
//! This module defines the `Processor` structure and its state machine. It coordinates the
//! following:
//! 1. **State Management:** Maintains the register file, program counter, and run state.
//! 2. **Lifecycle:** `Idle` until started, `Running` through the loop, `Halted` for good.
//! 3. **Memory Interface:** All memory access goes through a [`Transport`] target.
//!
//! [`Transport`]: crate::soc::Transport

/// Fetch-decode-execute loop.
pub mod execution;

/// Transaction helpers for fetch, load, and store.
pub mod memory;

use tracing::{info, warn};

use crate::common::error::Fault;
use crate::core::arch::RegisterFile;
use crate::stats::ExecStats;

/// Why the processor stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// An `END` instruction was executed.
    End,
    /// The loop stopped on a fault.
    Fault(Fault),
}

impl HaltReason {
    /// Returns the fault, if the halt was not a clean `END`.
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::End => None,
            Self::Fault(fault) => Some(fault),
        }
    }
}

/// Processor run state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CpuState {
    /// Waiting for the start notification.
    #[default]
    Idle,
    /// Inside the fetch-decode-execute loop.
    Running,
    /// Terminal; there is no transition back.
    Halted(HaltReason),
}

/// The processing unit.
///
/// Owns its register file exclusively; memory is reached only through the transport handle
/// passed into [`Processor::step`] and [`Processor::run`].
#[derive(Clone, Debug, Default)]
pub struct Processor {
    regs: RegisterFile,
    pc: u16,
    state: CpuState,
    stats: ExecStats,
    trace: bool,
}

impl Processor {
    /// Creates an idle processor with zeroed registers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables per-instruction tracing at debug level.
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the run state.
    pub const fn state(&self) -> CpuState {
        self.state
    }

    /// Returns the register file.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Returns the execution counters.
    pub const fn stats(&self) -> &ExecStats {
        &self.stats
    }

    /// Returns `true` once the processor reached its terminal state.
    pub const fn is_halted(&self) -> bool {
        matches!(self.state, CpuState::Halted(_))
    }

    /// Leaves `Idle` and begins executing at `pc`.
    ///
    /// The transition happens once; calls on a running or halted processor are ignored.
    pub fn start(&mut self, pc: u16) {
        if self.state != CpuState::Idle {
            warn!(pc, state = ?self.state, "start ignored: processor already started");
            return;
        }
        info!("received start address {pc:#04x}");
        self.pc = pc;
        self.state = CpuState::Running;
    }
}
