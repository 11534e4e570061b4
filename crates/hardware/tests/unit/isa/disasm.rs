//! # Disassembler Tests

use rstest::rstest;
use vnsim_core::isa::Instruction;
use vnsim_core::isa::disasm::disassemble;
use vnsim_core::sim::loader::encode_words;
use vnsim_core::sim::testbench::PROGRAM;

#[rstest]
#[case(Instruction::End, "END")]
#[case(Instruction::Load { rd: 2, addr: 0x03 }, "LOAD R2, [0x03]")]
#[case(Instruction::Add { rd: 3, rs1: 1, rs2: 2 }, "ADD R3, R1, R2")]
#[case(Instruction::Store { addr: 0x05, rs: 3 }, "STORE [0x05], R3")]
#[case(Instruction::Unknown(0x07), "UNKNOWN 0x07")]
fn test_display(#[case] inst: Instruction, #[case] text: &str) {
    assert_eq!(inst.to_string(), text);
}

#[test]
fn test_disassemble_reference_program() {
    let listing = disassemble(&encode_words(&PROGRAM));
    let text: Vec<&str> = listing.iter().map(|(_, s)| s.as_str()).collect();
    assert_eq!(
        text,
        [
            "LOAD R2, [0x03]",
            "LOAD R1, [0x04]",
            "ADD R3, R1, R2",
            "STORE [0x05], R3",
            "LOAD R0, [0x05]",
            "END",
        ]
    );
    let offsets: Vec<usize> = listing.iter().map(|(off, _)| *off).collect();
    assert_eq!(offsets, [0, 4, 8, 12, 16, 20]);
}

#[test]
fn test_disassemble_ignores_trailing_bytes() {
    let listing = disassemble(&[0x00, 0, 0, 0, 0x01, 2]);
    assert_eq!(listing, vec![(0, "END".to_owned())]);
}
