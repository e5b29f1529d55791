//! The eight conditional branches: taken, not taken, forward and backward.

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
fn bne_taken_forward() {
    let mut cpu = setup(&[0xD0, 0x06]);
    cpu.set_flag_z(false);
    cpu.step().unwrap();

    // offset applies after the PC has passed the 2-byte branch
    assert_eq!(cpu.pc(), 0x0208);
}

#[test]
fn bne_not_taken() {
    let mut cpu = setup(&[0xD0, 0x06]);
    cpu.set_flag_z(true);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0202);
}

#[test]
fn beq_taken_backward() {
    let mut cpu = setup(&[0xF0, 0xFC]); // offset -4
    cpu.set_flag_z(true);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x01FE);
}

#[test]
fn beq_offset_minus_two_loops_to_self() {
    let mut cpu = setup(&[0xF0, 0xFE]);
    cpu.set_flag_z(true);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0200);
}

#[test]
fn bcc_and_bcs() {
    let mut cpu = setup(&[0x90, 0x10]);
    cpu.set_flag_c(false);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0212);

    let mut cpu = setup(&[0xB0, 0x10]);
    cpu.set_flag_c(true);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0212);

    let mut cpu = setup(&[0xB0, 0x10]);
    cpu.set_flag_c(false);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0202);
}

#[test]
fn bpl_and_bmi() {
    let mut cpu = setup(&[0x10, 0x08]);
    cpu.set_flag_n(false);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x020A);

    let mut cpu = setup(&[0x30, 0x08]);
    cpu.set_flag_n(true);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x020A);
}

#[test]
fn bvc_and_bvs() {
    let mut cpu = setup(&[0x50, 0x02]);
    cpu.set_flag_v(false);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0204);

    let mut cpu = setup(&[0x70, 0x02]);
    cpu.set_flag_v(true);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0204);

    let mut cpu = setup(&[0x70, 0x02]);
    cpu.set_flag_v(false);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0202);
}

#[test]
fn branches_do_not_touch_flags() {
    let mut cpu = setup(&[0xD0, 0x06]);
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
}

#[test]
fn branch_wraps_around_address_space() {
    let mut ram = FlatRam::new();
    ram.load(0xFFFC, &[0xF0, 0xFF]); // reset to 0xFFF0, near the top
    ram.load(0xFFF0, &[0xD0, 0x20]); // BNE +0x20

    let mut cpu = Cpu::new(ram);
    cpu.reset().unwrap();
    cpu.set_flag_z(false);
    cpu.step().unwrap();

    // 0xFFF2 + 0x20 wraps modulo 2^16
    assert_eq!(cpu.pc(), 0x0012);
}
