//! # Loader Tests

use std::fs;

use vnsim_core::common::LoadError;
use vnsim_core::isa::Instruction;
use vnsim_core::sim::loader::{encode_program, encode_words, load_program, read_image};
use vnsim_core::soc::Memory;

#[test]
fn test_words_are_big_endian() {
    assert_eq!(
        encode_words(&[0x0102_0300, 0x0000_0000]),
        [0x01, 0x02, 0x03, 0x00, 0, 0, 0, 0]
    );
}

#[test]
fn test_program_encoding_matches_words() {
    let program = [
        Instruction::Load { rd: 2, addr: 0x03 },
        Instruction::Add { rd: 3, rs1: 1, rs2: 2 },
    ];
    assert_eq!(
        encode_program(&program),
        encode_words(&[0x0102_0300, 0x0203_0102])
    );
}

#[test]
fn test_load_program_places_bytes() {
    let mut memory = Memory::new();
    load_program(&mut memory, 0x21, &[Instruction::Store { addr: 0x05, rs: 3 }]).unwrap();
    assert_eq!(&memory.as_slice()[0x21..0x25], &[0x03, 0x05, 0x03, 0x00]);
    assert_eq!(memory[0x25], 0x25 % 3 + 5);
}

#[test]
fn test_load_program_out_of_bounds_leaves_memory() {
    let mut memory = Memory::new();
    let before = memory.clone();
    let err = load_program(&mut memory, 0xFE, &[Instruction::End]).unwrap_err();
    assert!(matches!(err, LoadError::OutOfBounds { offset: 0xFE, .. }));
    assert_eq!(memory, before);
}

#[test]
fn test_read_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prog.bin");
    fs::write(&path, encode_words(&[0x0000_0000])).unwrap();

    assert_eq!(read_image(&path).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn test_read_missing_image() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_image(dir.path().join("missing.bin")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("missing.bin"));
}
