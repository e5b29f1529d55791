//! JMP absolute and indirect.

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
fn jmp_absolute() {
    let mut cpu = setup(&[0x4C, 0x34, 0x12]);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn jmp_indirect() {
    let mut cpu = setup(&[0x6C, 0x00, 0x30]);
    cpu.bus_mut().load(0x3000, &[0x78, 0x56]);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x5678);
}

#[test]
fn jmp_indirect_has_no_page_boundary_bug() {
    // pointer at 0x12FF: the high byte comes from 0x1300, not 0x1200
    let mut cpu = setup(&[0x6C, 0xFF, 0x12]);
    cpu.bus_mut().load(0x12FF, &[0x34, 0x12]);
    cpu.bus_mut().load(0x1200, &[0xEE]); // would be read by a buggy NMOS fetch
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn jmp_does_not_touch_flags_or_stack() {
    let mut cpu = setup(&[0x4C, 0x00, 0x80]);
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);
    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}
