//! # Increment and Decrement Instructions
//!
//! INC/DEC on memory, INX/DEX/INY/DEY on the index registers. All wrap
//! modulo 256 and update N and Z from the result.

use crate::{Bus, Cpu, MemoryAccessError};

/// INC - increment memory.
pub(crate) fn execute_inc<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let addr = cpu.operand_address(cpu.ir_mode())?;
    let result = cpu.bus.read(addr)?.wrapping_add(1);
    cpu.bus.write(addr, result)?;
    cpu.set_arithmetic_flags(result);
    Ok(())
}

/// DEC - decrement memory.
pub(crate) fn execute_dec<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let addr = cpu.operand_address(cpu.ir_mode())?;
    let result = cpu.bus.read(addr)?.wrapping_sub(1);
    cpu.bus.write(addr, result)?;
    cpu.set_arithmetic_flags(result);
    Ok(())
}

/// INX - increment X.
pub(crate) fn execute_inx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_arithmetic_flags(cpu.x);
}

/// DEX - decrement X.
pub(crate) fn execute_dex<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_arithmetic_flags(cpu.x);
}

/// INY - increment Y.
pub(crate) fn execute_iny<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_arithmetic_flags(cpu.y);
}

/// DEY - decrement Y.
pub(crate) fn execute_dey<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_arithmetic_flags(cpu.y);
}
