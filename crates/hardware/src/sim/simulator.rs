//! Simulator: owns the processor and the memory it is bound to.
//!
//! Keeping both side-by-side lets the processor borrow memory as its transport target for the
//! duration of a run without any shared ownership.

use crate::common::KernelError;
use crate::config::Config;
use crate::core::{HaltReason, Processor};
use crate::sim::kernel::{StartSignal, start_signal};
use crate::soc::Memory;

/// Top-level simulator: processor + memory.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    /// Processor state (registers, program counter, run state, statistics).
    pub cpu: Processor,
    /// Memory the processor's transactions are routed to.
    pub memory: Memory,
}

impl Simulator {
    /// Creates a simulator with a fresh memory and an idle processor.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Processor::new().with_trace(config.general.trace_instructions),
            memory: Memory::with_size(config.memory.size_bytes),
        }
    }

    /// Runs the processor against memory once `start` fires.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StartSignalDropped`] if the start trigger is dropped unfired.
    pub fn run(&mut self, start: StartSignal) -> Result<HaltReason, KernelError> {
        self.cpu.run(&mut self.memory, start)
    }

    /// Fires a start notification for `pc` and runs to completion.
    ///
    /// # Errors
    ///
    /// As [`Simulator::run`]; cannot fail in practice since the trigger fires first.
    pub fn run_from(&mut self, pc: u16) -> Result<HaltReason, KernelError> {
        let (trigger, signal) = start_signal();
        trigger.fire(pc);
        self.run(signal)
    }
}
