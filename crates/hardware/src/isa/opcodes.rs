//! Opcode assignments.
//!
//! The opcode is byte 0 of every instruction word. Four values are defined; every other value
//! decodes to [`crate::isa::Instruction::Unknown`].

use std::fmt;

/// Opcode for `END`: halt the processor.
pub const OP_END: u8 = 0x00;

/// Opcode for `LOAD rd, [addr]`: read one byte into a register.
pub const OP_LOAD: u8 = 0x01;

/// Opcode for `ADD rd, rs1, rs2`: 8-bit wrapping add of two registers.
pub const OP_ADD: u8 = 0x02;

/// Opcode for `STORE [addr], rs`: write one register byte to memory.
pub const OP_STORE: u8 = 0x03;

/// Instruction mnemonic, used in disassembly and fault reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// `END`
    End,
    /// `LOAD`
    Load,
    /// `ADD`
    Add,
    /// `STORE`
    Store,
}

impl Mnemonic {
    /// Returns the opcode byte for this mnemonic.
    pub const fn opcode(self) -> u8 {
        match self {
            Self::End => OP_END,
            Self::Load => OP_LOAD,
            Self::Add => OP_ADD,
            Self::Store => OP_STORE,
        }
    }

    /// Returns the mnemonic for a defined opcode.
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            OP_END => Some(Self::End),
            OP_LOAD => Some(Self::Load),
            OP_ADD => Some(Self::Add),
            OP_STORE => Some(Self::Store),
            _ => None,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::End => "END",
            Self::Load => "LOAD",
            Self::Add => "ADD",
            Self::Store => "STORE",
        })
    }
}
