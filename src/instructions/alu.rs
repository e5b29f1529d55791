//! # ALU Instructions
//!
//! Arithmetic and logic over the accumulator and index registers: ADC, SBC
//! (with their decimal-mode variants), the bitwise group AND/ORA/EOR, the
//! flag-only BIT test, and the three compares.

use crate::{Bus, Cpu, MemoryAccessError};

/// ADC - Add with Carry.
///
/// Adds the operand and the carry to the accumulator. Decimal mode switches
/// to BCD digit arithmetic, which forces N and V false.
pub(crate) fn execute_adc<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let operand = cpu.operand(cpu.ir_mode())?;
    cpu.a = if cpu.flag_d {
        cpu.adc_decimal(cpu.a, operand)
    } else {
        cpu.adc(cpu.a, operand)
    };
    Ok(())
}

/// SBC - Subtract with Carry (borrow).
pub(crate) fn execute_sbc<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let operand = cpu.operand(cpu.ir_mode())?;
    cpu.a = if cpu.flag_d {
        cpu.sbc_decimal(cpu.a, operand)
    } else {
        cpu.sbc(cpu.a, operand)
    };
    Ok(())
}

/// AND - bitwise AND into the accumulator.
pub(crate) fn execute_and<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let operand = cpu.operand(cpu.ir_mode())?;
    cpu.a &= operand;
    cpu.set_arithmetic_flags(cpu.a);
    Ok(())
}

/// ORA - bitwise OR into the accumulator.
pub(crate) fn execute_ora<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let operand = cpu.operand(cpu.ir_mode())?;
    cpu.a |= operand;
    cpu.set_arithmetic_flags(cpu.a);
    Ok(())
}

/// EOR - bitwise exclusive OR into the accumulator.
pub(crate) fn execute_eor<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let operand = cpu.operand(cpu.ir_mode())?;
    cpu.a ^= operand;
    cpu.set_arithmetic_flags(cpu.a);
    Ok(())
}

/// BIT - test bits in memory against the accumulator.
///
/// Z from `A & data`; N and V from bits 7 and 6 of the masked value, which
/// coincide with the operand's bits whenever the accumulator has them set.
pub(crate) fn execute_bit<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let operand = cpu.operand(cpu.ir_mode())?;
    let masked = cpu.a & operand;
    cpu.flag_z = masked == 0;
    cpu.flag_n = masked & 0x80 != 0;
    cpu.flag_v = masked & 0x40 != 0;
    Ok(())
}

/// CMP - compare the accumulator with the operand.
pub(crate) fn execute_cmp<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let operand = cpu.operand(cpu.ir_mode())?;
    cpu.compare(cpu.a, operand);
    Ok(())
}

/// CPX - compare X with the operand.
pub(crate) fn execute_cpx<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let operand = cpu.operand(cpu.ir_mode())?;
    cpu.compare(cpu.x, operand);
    Ok(())
}

/// CPY - compare Y with the operand.
pub(crate) fn execute_cpy<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), MemoryAccessError> {
    let operand = cpu.operand(cpu.ir_mode())?;
    cpu.compare(cpu.y, operand);
    Ok(())
}
