//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR, each targeting either the accumulator or the
//! memory location named by the addressing mode (a read-modify-write).

use crate::{AddressingMode, Bus, Cpu, MemoryAccessError};

/// Applies `f` to the accumulator or to memory per the addressing mode,
/// then sets N and Z from the result.
fn read_modify_write<B: Bus>(
    cpu: &mut Cpu<B>,
    f: fn(&mut Cpu<B>, u8) -> u8,
) -> Result<(), MemoryAccessError> {
    match cpu.ir_mode() {
        AddressingMode::Accumulator => {
            let a = cpu.a;
            cpu.a = f(cpu, a);
            cpu.set_arithmetic_flags(cpu.a);
        }
        mode => {
            let addr = cpu.operand_address(mode)?;
            let m = cpu.bus.read(addr)?;
            let result = f(cpu, m);
            cpu.bus.write(addr, result)?;
            cpu.set_arithmetic_flags(result);
        }
    }
    Ok(())
}

/// ASL - arithmetic shift left.
pub(crate) fn execute_asl<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    read_modify_write(cpu, Cpu::asl)
}

/// LSR - logical shift right. N always ends up clear.
pub(crate) fn execute_lsr<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    read_modify_write(cpu, Cpu::lsr)
}

/// ROL - rotate left through carry.
pub(crate) fn execute_rol<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    read_modify_write(cpu, Cpu::rol)
}

/// ROR - rotate right through carry.
pub(crate) fn execute_ror<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    read_modify_write(cpu, Cpu::ror)
}
