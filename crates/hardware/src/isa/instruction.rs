//! Instruction representation and encoding.
//!
//! An instruction word is four bytes: `[opcode, field1, field2, field3]`. The meaning of each
//! field depends on the opcode:
//!
//! | opcode | field1 | field2 | field3 |
//! |--------|--------|--------|--------|
//! | `END`   | -      | -      | -      |
//! | `LOAD`  | rd     | addr   | -      |
//! | `ADD`   | rd     | rs1    | rs2    |
//! | `STORE` | addr   | rs     | -      |
//!
//! Register fields are raw bytes; range checks happen at execute time.

use super::opcodes::{Mnemonic, OP_ADD, OP_END, OP_LOAD, OP_STORE};
use crate::common::constants::INSTRUCTION_WIDTH;

/// Raw instruction word as fetched from memory.
pub type InstructionWord = [u8; INSTRUCTION_WIDTH];

/// Decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Halt the processor.
    End,
    /// `rd <- mem[addr]`.
    Load {
        /// Destination register index.
        rd: u8,
        /// Source address.
        addr: u8,
    },
    /// `rd <- rs1 + rs2` (wrapping).
    Add {
        /// Destination register index.
        rd: u8,
        /// First operand register index.
        rs1: u8,
        /// Second operand register index.
        rs2: u8,
    },
    /// `mem[addr] <- rs`.
    Store {
        /// Destination address.
        addr: u8,
        /// Source register index.
        rs: u8,
    },
    /// Opcode byte outside the defined set.
    Unknown(u8),
}

impl Instruction {
    /// Returns the opcode byte.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::End => OP_END,
            Self::Load { .. } => OP_LOAD,
            Self::Add { .. } => OP_ADD,
            Self::Store { .. } => OP_STORE,
            Self::Unknown(op) => *op,
        }
    }

    /// Returns the mnemonic, or `None` for an unknown opcode.
    pub const fn mnemonic(&self) -> Option<Mnemonic> {
        Mnemonic::from_opcode(self.opcode())
    }

    /// Encodes the instruction into its 4-byte word; unused fields are zero.
    pub const fn encode(&self) -> InstructionWord {
        match *self {
            Self::End => [OP_END, 0, 0, 0],
            Self::Load { rd, addr } => [OP_LOAD, rd, addr, 0],
            Self::Add { rd, rs1, rs2 } => [OP_ADD, rd, rs1, rs2],
            Self::Store { addr, rs } => [OP_STORE, addr, rs, 0],
            Self::Unknown(op) => [op, 0, 0, 0],
        }
    }

    /// Returns `true` if the instruction issues a data transaction when executed.
    pub const fn accesses_memory(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Store { .. })
    }
}
