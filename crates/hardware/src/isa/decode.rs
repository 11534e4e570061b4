//! Instruction Decoder.
//!
//! Turns a fetched 4-byte word into an [`Instruction`]. Decoding is a pure dispatch on byte 0;
//! field bytes are copied as-is and validated later by the executing processor.

use super::instruction::{Instruction, InstructionWord};
use super::opcodes::{OP_ADD, OP_END, OP_LOAD, OP_STORE};

/// Decodes an instruction word.
///
/// # Arguments
///
/// * `word` - The four bytes fetched at the program counter.
///
/// # Returns
///
/// The decoded instruction; opcodes outside the defined set yield [`Instruction::Unknown`].
#[inline]
pub const fn decode(word: InstructionWord) -> Instruction {
    let [opcode, f1, f2, f3] = word;
    match opcode {
        OP_END => Instruction::End,
        OP_LOAD => Instruction::Load { rd: f1, addr: f2 },
        OP_ADD => Instruction::Add {
            rd: f1,
            rs1: f2,
            rs2: f3,
        },
        OP_STORE => Instruction::Store { addr: f1, rs: f2 },
        other => Instruction::Unknown(other),
    }
}
