//! # Register Transfer Instructions
//!
//! Register-to-register moves. All update N and Z from the destination
//! except TXS, which sets SP without touching flags.

use crate::{Bus, Cpu};

/// TAX - transfer A to X.
pub(crate) fn execute_tax<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.a;
    cpu.set_arithmetic_flags(cpu.x);
}

/// TAY - transfer A to Y.
pub(crate) fn execute_tay<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.a;
    cpu.set_arithmetic_flags(cpu.y);
}

/// TXA - transfer X to A.
pub(crate) fn execute_txa<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.x;
    cpu.set_arithmetic_flags(cpu.a);
}

/// TYA - transfer Y to A.
pub(crate) fn execute_tya<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.y;
    cpu.set_arithmetic_flags(cpu.a);
}

/// TSX - transfer SP to X.
pub(crate) fn execute_tsx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.sp;
    cpu.set_arithmetic_flags(cpu.x);
}

/// TXS - transfer X to SP. Flags are untouched.
pub(crate) fn execute_txs<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sp = cpu.x;
}
