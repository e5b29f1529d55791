//! Register transfer instructions.

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
fn tax_and_tay() {
    let mut cpu = setup(&[0xAA, 0xA8]);
    cpu.set_a(0x80);
    cpu.step_n(2).unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn txa_and_tya() {
    let mut cpu = setup(&[0x8A]);
    cpu.set_x(0x00);
    cpu.set_a(0x42);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    let mut cpu = setup(&[0x98]);
    cpu.set_y(0x7F);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x7F);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn tsx_copies_sp_with_flags() {
    let mut cpu = setup(&[0xBA]);
    cpu.set_sp(0x00);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn txs_sets_sp_without_touching_flags() {
    let mut cpu = setup(&[0x9A]);
    cpu.set_x(0x00);
    cpu.set_flag_z(false);
    cpu.set_flag_n(true);
    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    // TXS is the one transfer that leaves N and Z alone
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}
