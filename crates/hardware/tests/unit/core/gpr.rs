//! # Register File Tests

use vnsim_core::core::arch::RegisterFile;

#[test]
fn test_power_on_registers_are_zero() {
    assert_eq!(RegisterFile::new().snapshot(), [0; 4]);
}

#[test]
fn test_index_validation() {
    for raw in 0..4u8 {
        assert_eq!(RegisterFile::index(raw), Some(usize::from(raw)));
    }
    assert_eq!(RegisterFile::index(4), None);
    assert_eq!(RegisterFile::index(255), None);
}

#[test]
fn test_write_is_isolated() {
    let mut regs = RegisterFile::new();
    regs.write(2, 0xAB);
    assert_eq!(regs.snapshot(), [0, 0, 0xAB, 0]);
    assert_eq!(regs.read(2), 0xAB);
}
