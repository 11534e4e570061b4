//! # Processor Lifecycle Tests
//!
//! `Idle` -> `Running` -> `Halted`, and the transitions that must not happen.

use vnsim_core::core::{CpuState, HaltReason, Processor};
use vnsim_core::isa::Instruction;
use vnsim_core::sim::loader::load_program;
use vnsim_core::soc::Memory;

use crate::common::mocks::bus::RecordingBus;

#[test]
fn test_new_processor_is_idle() {
    let cpu = Processor::new();
    assert_eq!(cpu.state(), CpuState::Idle);
    assert_eq!(cpu.pc(), 0);
    assert!(!cpu.is_halted());
}

#[test]
fn test_step_while_idle_issues_nothing() {
    let mut cpu = Processor::new();
    let mut bus = RecordingBus::new(Memory::new());

    assert_eq!(cpu.step(&mut bus), CpuState::Idle);
    assert!(bus.log.is_empty());
}

#[test]
fn test_start_sets_pc_once() {
    let mut cpu = Processor::new();
    cpu.start(0x21);
    assert_eq!(cpu.state(), CpuState::Running);
    assert_eq!(cpu.pc(), 0x21);

    cpu.start(0x40);
    assert_eq!(cpu.pc(), 0x21);
}

#[test]
fn test_step_advances_by_one_instruction() {
    let mut memory = Memory::new();
    load_program(
        &mut memory,
        0x10,
        &[Instruction::Add { rd: 0, rs1: 0, rs2: 0 }, Instruction::End],
    )
    .unwrap();
    let mut bus = RecordingBus::new(memory);
    let mut cpu = Processor::new();
    cpu.start(0x10);

    assert_eq!(cpu.step(&mut bus), CpuState::Running);
    assert_eq!(cpu.pc(), 0x14);
    assert_eq!(cpu.step(&mut bus), CpuState::Halted(HaltReason::End));
    assert_eq!(cpu.pc(), 0x14);
}

#[test]
fn test_halted_is_terminal() {
    let mut memory = Memory::new();
    load_program(&mut memory, 0, &[Instruction::End]).unwrap();
    let mut bus = RecordingBus::new(memory);
    let mut cpu = Processor::new();
    cpu.start(0);

    assert_eq!(cpu.step(&mut bus), CpuState::Halted(HaltReason::End));
    let issued = bus.log.len();

    cpu.start(0x20);
    assert_eq!(cpu.step(&mut bus), CpuState::Halted(HaltReason::End));
    assert_eq!(bus.log.len(), issued);
    assert_eq!(cpu.pc(), 0);
    assert!(cpu.is_halted());
}
