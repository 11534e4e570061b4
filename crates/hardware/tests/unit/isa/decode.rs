//! # Decoder Tests
//!
//! Dispatch on the opcode byte, field placement, and encoding agreement.

use rstest::rstest;
use vnsim_core::isa::opcodes::{OP_ADD, OP_END, OP_LOAD, OP_STORE};
use vnsim_core::isa::{Instruction, Mnemonic, decode};

#[rstest]
#[case([0x00, 0, 0, 0], Instruction::End)]
#[case([0x01, 2, 0x03, 0], Instruction::Load { rd: 2, addr: 0x03 })]
#[case([0x02, 3, 1, 2], Instruction::Add { rd: 3, rs1: 1, rs2: 2 })]
#[case([0x03, 0x05, 3, 0], Instruction::Store { addr: 0x05, rs: 3 })]
fn test_decode_defined_opcodes(#[case] word: [u8; 4], #[case] expected: Instruction) {
    assert_eq!(decode(word), expected);
    assert_eq!(expected.encode(), word);
}

#[rstest]
#[case(0x04)]
#[case(0x07)]
#[case(0x80)]
#[case(0xFF)]
fn test_decode_unknown_opcode(#[case] opcode: u8) {
    let inst = decode([opcode, 1, 2, 3]);
    assert_eq!(inst, Instruction::Unknown(opcode));
    assert_eq!(inst.opcode(), opcode);
    assert_eq!(inst.mnemonic(), None);
}

#[test]
fn test_register_fields_are_not_range_checked() {
    assert_eq!(
        decode([OP_ADD, 9, 4, 200]),
        Instruction::Add {
            rd: 9,
            rs1: 4,
            rs2: 200
        }
    );
}

#[test]
fn test_mnemonic_opcode_table() {
    for (mnemonic, opcode) in [
        (Mnemonic::End, OP_END),
        (Mnemonic::Load, OP_LOAD),
        (Mnemonic::Add, OP_ADD),
        (Mnemonic::Store, OP_STORE),
    ] {
        assert_eq!(mnemonic.opcode(), opcode);
        assert_eq!(Mnemonic::from_opcode(opcode), Some(mnemonic));
    }
}

#[test]
fn test_only_load_and_store_touch_memory() {
    assert!(Instruction::Load { rd: 0, addr: 0 }.accesses_memory());
    assert!(Instruction::Store { addr: 0, rs: 0 }.accesses_memory());
    assert!(!Instruction::Add { rd: 0, rs1: 0, rs2: 0 }.accesses_memory());
    assert!(!Instruction::End.accesses_memory());
    assert!(!Instruction::Unknown(0x42).accesses_memory());
}
