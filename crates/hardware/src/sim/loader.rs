//! Program Loader.
//!
//! This module provides the harness-side utilities for placing programs in memory. It performs:
//! 1. **Encoding:** Turns instructions or 32-bit words into the byte stream memory holds.
//! 2. **Image reading:** Reads a raw program image from disk.
//! 3. **Placement:** Copies bytes into memory through the harness back-door.
//!
//! None of this goes through the transaction interface; it runs before the start signal fires.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::LoadError;
use crate::isa::Instruction;
use crate::soc::Memory;

/// Encodes 32-bit program words, most significant byte first.
///
/// The top byte of each word is the opcode, so `0x0102_0300` is `LOAD R2, [0x03]`.
pub fn encode_words(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// Encodes a sequence of instructions into a contiguous byte stream.
pub fn encode_program(program: &[Instruction]) -> Vec<u8> {
    program.iter().flat_map(Instruction::encode).collect()
}

/// Places `program` in memory starting at `addr`.
///
/// # Errors
///
/// Returns [`LoadError::OutOfBounds`] if the program does not fit; memory is left untouched.
pub fn load_program(
    memory: &mut Memory,
    addr: u16,
    program: &[Instruction],
) -> Result<(), LoadError> {
    let bytes = encode_program(program);
    memory.load(&bytes, usize::from(addr))?;
    debug!("loaded {} instructions at {addr:#04x}", program.len());
    Ok(())
}

/// Reads a raw program image from disk.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn read_image(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
