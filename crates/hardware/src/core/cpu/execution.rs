//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. Each iteration:
//! 1. **Fetch:** Reads 4 bytes at the program counter; a bad response halts.
//! 2. **Decode:** Dispatches on the opcode byte into an [`Instruction`].
//! 3. **Execute:** Validates register fields in order, then applies the instruction, issuing
//!    at most one data transaction.
//! 4. **Advance:** Moves the program counter by the instruction width unless halted.
//!
//! Every fault is terminal: it is logged once and the processor enters `Halted`.

use tracing::{debug, error, info};

use super::{CpuState, HaltReason, Processor};
use crate::common::constants::INSTRUCTION_WIDTH;
use crate::common::{Fault, KernelError};
use crate::core::arch::RegisterFile;
use crate::isa::{Instruction, Mnemonic, decode};
use crate::sim::kernel::StartSignal;
use crate::soc::Transport;

/// Control flow after executing one instruction.
enum Flow {
    Next,
    End,
}

impl Processor {
    /// Waits for the start notification, then runs until halted.
    ///
    /// This is the processor's only suspension point; once started the loop runs to
    /// completion without yielding.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StartSignalDropped`] if the trigger is dropped without firing;
    /// the processor stays `Idle`.
    pub fn run<T: Transport + ?Sized>(
        &mut self,
        bus: &mut T,
        start: StartSignal,
    ) -> Result<HaltReason, KernelError> {
        let pc = start.wait()?;
        self.start(pc);
        loop {
            if let CpuState::Halted(reason) = self.step(bus) {
                return Ok(reason);
            }
        }
    }

    /// Executes one fetch-decode-execute iteration.
    ///
    /// # Returns
    ///
    /// The state after the iteration. An idle or halted processor does nothing and reports
    /// its current state.
    pub fn step<T: Transport + ?Sized>(&mut self, bus: &mut T) -> CpuState {
        if self.state != CpuState::Running {
            return self.state;
        }

        let word = match self.fetch(bus) {
            Ok(word) => word,
            Err(fault) => return self.halt(HaltReason::Fault(fault)),
        };
        let inst = decode(word);
        if self.trace {
            debug!(pc = self.pc, raw = ?word, "{inst}");
        }

        match self.execute(inst, bus) {
            Ok(Flow::Next) => {
                self.stats.instructions_retired += 1;
                self.pc = self.pc.wrapping_add(INSTRUCTION_WIDTH as u16);
                self.state
            }
            Ok(Flow::End) => {
                self.stats.instructions_retired += 1;
                info!("END instruction at {:#04x}", self.pc);
                self.halt(HaltReason::End)
            }
            Err(fault) => self.halt(HaltReason::Fault(fault)),
        }
    }

    fn execute<T: Transport + ?Sized>(
        &mut self,
        inst: Instruction,
        bus: &mut T,
    ) -> Result<Flow, Fault> {
        match inst {
            Instruction::End => Ok(Flow::End),
            Instruction::Load { rd, addr } => {
                let rd_idx = reg_index(Mnemonic::Load, rd)?;
                let value = self.load_byte(bus, addr)?;
                self.regs.write(rd_idx, value);
                info!("LOAD {value} to R{rd} from address {addr:#04x}");
                Ok(Flow::Next)
            }
            Instruction::Add { rd, rs1, rs2 } => {
                let rd_idx = reg_index(Mnemonic::Add, rd)?;
                let a = self.regs.read(reg_index(Mnemonic::Add, rs1)?);
                let b = self.regs.read(reg_index(Mnemonic::Add, rs2)?);
                let result = a.wrapping_add(b);
                self.regs.write(rd_idx, result);
                info!("ADD R{rs1}+R{rs2}=R{rd}, result {result}");
                Ok(Flow::Next)
            }
            Instruction::Store { addr, rs } => {
                let value = self.regs.read(reg_index(Mnemonic::Store, rs)?);
                self.store_byte(bus, addr, value)?;
                info!("STORE {value} from R{rs} to address {addr:#04x}");
                Ok(Flow::Next)
            }
            Instruction::Unknown(opcode) => Err(Fault::UnknownOpcode {
                pc: self.pc,
                opcode,
            }),
        }
    }

    fn halt(&mut self, reason: HaltReason) -> CpuState {
        if let HaltReason::Fault(fault) = reason {
            self.stats.faults += 1;
            error!(pc = self.pc, "{fault}");
        }
        if self.trace {
            self.regs.dump();
        }
        self.state = CpuState::Halted(reason);
        self.state
    }
}

/// Validates a raw register field for `mnemonic`.
fn reg_index(mnemonic: Mnemonic, raw: u8) -> Result<usize, Fault> {
    RegisterFile::index(raw).ok_or(Fault::InvalidRegister { mnemonic, reg: raw })
}
