//! Memory Access Helpers.
//!
//! This module provides the interface between the processor and its transport target.
//! It performs the following:
//! 1. **Transaction Construction:** Builds one transaction per access, right before the call.
//! 2. **Status Mapping:** Converts a non-`Ok` response into a [`Fault`] naming the access.
//! 3. **Accounting:** Counts fetches, loads, and stores as they are issued.

use super::Processor;
use crate::common::constants::INSTRUCTION_WIDTH;
use crate::common::{AccessType, Fault};
use crate::isa::InstructionWord;
use crate::soc::{Command, ResponseStatus, Transaction, Transport};

impl Processor {
    /// Reads the 4-byte instruction word at the program counter.
    pub(super) fn fetch<T: Transport + ?Sized>(
        &mut self,
        bus: &mut T,
    ) -> Result<InstructionWord, Fault> {
        let mut word = [0u8; INSTRUCTION_WIDTH];
        self.transact(bus, AccessType::Fetch, u64::from(self.pc), &mut word)?;
        Ok(word)
    }

    /// Reads one data byte.
    pub(super) fn load_byte<T: Transport + ?Sized>(
        &mut self,
        bus: &mut T,
        addr: u8,
    ) -> Result<u8, Fault> {
        let mut data = [0u8; 1];
        self.transact(bus, AccessType::Read, u64::from(addr), &mut data)?;
        Ok(data[0])
    }

    /// Writes one data byte.
    pub(super) fn store_byte<T: Transport + ?Sized>(
        &mut self,
        bus: &mut T,
        addr: u8,
        val: u8,
    ) -> Result<(), Fault> {
        let mut data = [val];
        self.transact(bus, AccessType::Write, u64::from(addr), &mut data)
    }

    /// Issues a single blocking transaction and maps its response status.
    fn transact<T: Transport + ?Sized>(
        &mut self,
        bus: &mut T,
        access: AccessType,
        addr: u64,
        buf: &mut [u8],
    ) -> Result<(), Fault> {
        let command = match access {
            AccessType::Fetch | AccessType::Read => Command::Read,
            AccessType::Write => Command::Write,
        };
        self.stats.record_access(access);

        let mut trans = Transaction::new(command, addr, buf);
        bus.b_transport(&mut trans);

        match trans.status() {
            ResponseStatus::Ok => Ok(()),
            ResponseStatus::AddressError => Err(Fault::AddressError { access, addr }),
            // A target that leaves the transaction unserviced did not accept the command.
            ResponseStatus::CommandError | ResponseStatus::Incomplete => {
                Err(Fault::CommandError { access, addr })
            }
        }
    }
}
