//! CMP, CPX and CPY, including the frozen negative-flag behavior.

use sim6502::{Cpu, FlatRam};

fn setup(program: &[u8]) -> Cpu<FlatRam> {
    let mut ram = FlatRam::new();
    ram.load(0xFFFC, &[0x00, 0x02]);
    ram.load(0x0200, program);
    let mut cpu = Cpu::new(ram);
    cpu.reset().unwrap();
    cpu
}

#[test]
fn cmp_equal() {
    let mut cpu = setup(&[0xC9, 0x42]);
    cpu.set_a(0x42);
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    // compare does not change A
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn cmp_greater() {
    let mut cpu = setup(&[0xC9, 0x10]);
    cpu.set_a(0x20);
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    // N tracks the sign of the full difference, so a positive difference
    // sets it
    assert!(cpu.flag_n());
}

#[test]
fn cmp_less() {
    let mut cpu = setup(&[0xC9, 0x20]);
    cpu.set_a(0x10);
    cpu.step().unwrap();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn cmp_wrapped_difference_does_not_set_n() {
    // N comes from the signed difference (-255 < 0), never from bit 7 of
    // the wrapped byte
    let mut cpu = setup(&[0xC9, 0xFF]);
    cpu.set_a(0x00);
    cpu.step().unwrap();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn cmp_zero_page() {
    let mut cpu = setup(&[0xC5, 0x33]);
    cpu.bus_mut().load(0x0033, &[0x05]);
    cpu.set_a(0x05);
    cpu.step().unwrap();

    assert!(cpu.flag_z());
}

#[test]
fn cpx_immediate() {
    let mut cpu = setup(&[0xE0, 0x10]);
    cpu.set_x(0x30);
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn cpx_absolute() {
    let mut cpu = setup(&[0xEC, 0x00, 0x50]);
    cpu.bus_mut().load(0x5000, &[0x40]);
    cpu.set_x(0x40);
    cpu.step().unwrap();

    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn cpy_immediate_less() {
    let mut cpu = setup(&[0xC0, 0x80]);
    cpu.set_y(0x7F);
    cpu.step().unwrap();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn cpy_zero_page() {
    let mut cpu = setup(&[0xC4, 0x44]);
    cpu.bus_mut().load(0x0044, &[0x01]);
    cpu.set_y(0x02);
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}
