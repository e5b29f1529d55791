//! LDA across its eight addressing modes, plus flag behavior.

use sim6502::{Cpu, FlatRam};

/// CPU reset with the vector pointing at 0x0200 and `program` loaded there.
fn setup(program: &[u8]) -> Cpu<FlatRam> {
    let mut ram = FlatRam::new();
    ram.load(0xFFFC, &[0x00, 0x02]);
    ram.load(0x0200, program);
    let mut cpu = Cpu::new(ram);
    cpu.reset().unwrap();
    cpu
}

#[test]
fn lda_immediate() {
    let mut cpu = setup(&[0xA9, 0x2A]);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x2A);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0202);
}

#[test]
fn lda_immediate_zero_sets_z() {
    let mut cpu = setup(&[0xA9, 0x00]);
    cpu.set_a(0x55);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn lda_immediate_negative_sets_n() {
    let mut cpu = setup(&[0xA9, 0x80]);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn lda_zero_page() {
    let mut cpu = setup(&[0xA5, 0x40]);
    cpu.bus_mut().load(0x0040, &[0x77]);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn lda_zero_page_x_wraps_in_page() {
    let mut cpu = setup(&[0xB5, 0xF0]);
    cpu.set_x(0x20);
    cpu.bus_mut().load(0x0010, &[0x33]); // 0xF0 + 0x20 wraps to 0x10
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
}

#[test]
fn lda_absolute() {
    let mut cpu = setup(&[0xAD, 0x00, 0x40]);
    cpu.bus_mut().load(0x4000, &[0x12]);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.pc(), 0x0203);
}

#[test]
fn lda_absolute_x() {
    let mut cpu = setup(&[0xBD, 0xFE, 0x40]);
    cpu.set_x(0x03);
    cpu.bus_mut().load(0x4101, &[0x34]); // crosses into the next page
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x34);
}

#[test]
fn lda_absolute_y() {
    let mut cpu = setup(&[0xB9, 0x00, 0x40]);
    cpu.set_y(0x10);
    cpu.bus_mut().load(0x4010, &[0x56]);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x56);
}

#[test]
fn lda_indirect_x_uses_single_pointer_byte() {
    // ($40,X) with X=4 reads the pointer byte at 0x44; that byte alone is
    // the effective address (high byte zero).
    let mut cpu = setup(&[0xA1, 0x40]);
    cpu.set_x(0x04);
    cpu.bus_mut().load(0x0044, &[0x90]);
    cpu.bus_mut().load(0x0090, &[0x21]);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x21);
}

#[test]
fn lda_indirect_y_adds_y_to_pointer_byte() {
    // ($40),Y reads the pointer byte at 0x40 and adds Y to it.
    let mut cpu = setup(&[0xB1, 0x40]);
    cpu.set_y(0x05);
    cpu.bus_mut().load(0x0040, &[0x80]);
    cpu.bus_mut().load(0x0085, &[0x43]);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x43);
}
