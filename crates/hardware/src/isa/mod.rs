//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the decoded instruction type, the decoder, and the
//! disassembler used for trace output.
//!
//! # Instructions
//!
//! * `END` (`0x00`): halt.
//! * `LOAD` (`0x01`): register <- memory byte.
//! * `ADD` (`0x02`): register <- register + register (8-bit wrap).
//! * `STORE` (`0x03`): memory byte <- register.

/// Instruction decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction type and byte encoding.
pub mod instruction;

/// Opcode constants and mnemonics.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Instruction, InstructionWord};
pub use opcodes::Mnemonic;
