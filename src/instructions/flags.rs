//! # Flag Instructions
//!
//! Direct set/clear of individual status flags. There is no SEV: the 6502
//! can only clear overflow, which is set by the ALU (or the SO pin, which
//! this core does not model).

use crate::{Bus, Cpu};

/// CLC - clear carry.
pub(crate) fn execute_clc<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.flag_c = false;
}

/// SEC - set carry.
pub(crate) fn execute_sec<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.flag_c = true;
}

/// CLI - clear interrupt disable.
pub(crate) fn execute_cli<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.flag_i = false;
}

/// SEI - set interrupt disable.
pub(crate) fn execute_sei<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.flag_i = true;
}

/// CLD - clear decimal mode.
pub(crate) fn execute_cld<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.flag_d = false;
}

/// SED - set decimal mode.
pub(crate) fn execute_sed<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.flag_d = true;
}

/// CLV - clear overflow.
pub(crate) fn execute_clv<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.flag_v = false;
}
