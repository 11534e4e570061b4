//! Instruction disassembler for trace output.

use std::fmt;

use super::decode::decode;
use super::instruction::Instruction;
use crate::common::constants::INSTRUCTION_WIDTH;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::End => write!(f, "END"),
            Self::Load { rd, addr } => write!(f, "LOAD R{rd}, [{addr:#04x}]"),
            Self::Add { rd, rs1, rs2 } => write!(f, "ADD R{rd}, R{rs1}, R{rs2}"),
            Self::Store { addr, rs } => write!(f, "STORE [{addr:#04x}], R{rs}"),
            Self::Unknown(op) => write!(f, "UNKNOWN {op:#04x}"),
        }
    }
}

/// Disassembles a run of encoded instructions into `(offset, text)` pairs.
///
/// Trailing bytes that do not form a whole instruction are ignored.
pub fn disassemble(bytes: &[u8]) -> Vec<(usize, String)> {
    bytes
        .chunks_exact(INSTRUCTION_WIDTH)
        .enumerate()
        .map(|(i, chunk)| {
            let word = [chunk[0], chunk[1], chunk[2], chunk[3]];
            (i * INSTRUCTION_WIDTH, decode(word).to_string())
        })
        .collect()
}
