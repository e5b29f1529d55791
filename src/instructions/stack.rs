//! # Stack Instructions
//!
//! Pushes and pops of the accumulator and the status word through page 1.

use crate::{Bus, Cpu, MemoryAccessError};

/// PHA - push accumulator.
pub(crate) fn execute_pha<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    cpu.stack_push(cpu.a)
}

/// PHP - push processor status (bit 5 reads as 1 in the pushed byte).
pub(crate) fn execute_php<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let status = cpu.status();
    cpu.stack_push(status)
}

/// PLA - pull accumulator; updates N and Z.
pub(crate) fn execute_pla<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    cpu.a = cpu.stack_pop()?;
    cpu.set_arithmetic_flags(cpu.a);
    Ok(())
}

/// PLP - pull processor status, restoring all seven flags (bit 5 on the
/// wire is ignored).
pub(crate) fn execute_plp<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let status = cpu.stack_pop()?;
    cpu.set_status(status);
    Ok(())
}
