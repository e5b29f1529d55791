//! # Load and Store Instructions
//!
//! LDA/LDX/LDY and STA/STX/STY.
//!
//! The stores update N and Z from the stored register. Real hardware does
//! not; this core's contract is frozen that way and hosts depend on it, so
//! match it rather than "fix" it.

use crate::{Bus, Cpu, MemoryAccessError};

/// LDA - load accumulator.
pub(crate) fn execute_lda<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    cpu.a = cpu.operand(cpu.ir_mode())?;
    cpu.set_arithmetic_flags(cpu.a);
    Ok(())
}

/// LDX - load X.
pub(crate) fn execute_ldx<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    cpu.x = cpu.operand(cpu.ir_mode())?;
    cpu.set_arithmetic_flags(cpu.x);
    Ok(())
}

/// LDY - load Y.
pub(crate) fn execute_ldy<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    cpu.y = cpu.operand(cpu.ir_mode())?;
    cpu.set_arithmetic_flags(cpu.y);
    Ok(())
}

/// STA - store accumulator.
pub(crate) fn execute_sta<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let addr = cpu.operand_address(cpu.ir_mode())?;
    cpu.bus.write(addr, cpu.a)?;
    cpu.set_arithmetic_flags(cpu.a);
    Ok(())
}

/// STX - store X.
pub(crate) fn execute_stx<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let addr = cpu.operand_address(cpu.ir_mode())?;
    cpu.bus.write(addr, cpu.x)?;
    cpu.set_arithmetic_flags(cpu.x);
    Ok(())
}

/// STY - store Y.
pub(crate) fn execute_sty<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let addr = cpu.operand_address(cpu.ir_mode())?;
    cpu.bus.write(addr, cpu.y)?;
    cpu.set_arithmetic_flags(cpu.y);
    Ok(())
}
