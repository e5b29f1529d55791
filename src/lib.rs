//! # 6502 CPU Simulator Core
//!
//! An instruction-stepped simulation of the MOS Technology 6502 8-bit
//! microprocessor: the architectural register file, the status word, and a
//! fetch-decode-execute engine driving an externally supplied memory bus.
//!
//! The crate deliberately covers *only* the CPU core and its bus contract.
//! Memory maps, devices, ROM loading, clocking and front-ends are the host's
//! business: implement [`Bus`] and hand it to the CPU.
//!
//! ## Quick Start
//!
//! ```rust
//! use sim6502::{Cpu, FlatRam};
//!
//! let mut ram = FlatRam::new();
//!
//! // Reset vector -> 0x0200, program: LDA #$2A
//! ram.load(0xFFFC, &[0x00, 0x02]);
//! ram.load(0x0200, &[0xA9, 0x2A]);
//!
//! let mut cpu = Cpu::new(ram);
//! cpu.reset().unwrap();
//! assert_eq!(cpu.pc(), 0x0200);
//!
//! cpu.step().unwrap();
//! assert_eq!(cpu.a(), 0x2A);
//! assert_eq!(cpu.pc(), 0x0202);
//! ```
//!
//! ## Architecture
//!
//! - **Register file & status word** live on [`Cpu`]: A, X, Y, PC, SP, IR and
//!   the seven semantic flags, with packed [`Cpu::status`]/[`Cpu::set_status`]
//!   accessors (bit 5 always reads 1).
//! - **Bus interface**: the [`Bus`] trait - `read` and `write`, both fallible.
//!   A failed access aborts the current step; state mutated before the fault
//!   stays mutated, as on real hardware.
//! - **Execution unit**: [`Cpu::step`] executes exactly one instruction -
//!   fetch, decode through the 256-entry [`OPCODE_TABLE`], resolve the operand
//!   per addressing mode, dispatch. All 151 documented NMOS opcodes are
//!   implemented; the remaining 105 raise the opcode trap and do nothing else.

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod opcodes;

// Per-category opcode handlers (not part of the public API).
mod instructions;

pub use addressing::AddressingMode;
pub use bus::{Bus, FlatRam};
pub use cpu::{
    opcode_string, Cpu, DEFAULT_BASE_ADDRESS, IRQ_VECTOR_H, IRQ_VECTOR_L, NMI_VECTOR_H,
    NMI_VECTOR_L, RST_VECTOR_H, RST_VECTOR_L,
};
pub use opcodes::{instruction_mode, instruction_size, Mnemonic, OpcodeMetadata, OPCODE_TABLE};

/// Error raised by a [`Bus`] when a memory access cannot be completed.
///
/// This is the only error kind the core propagates. It is always recoverable
/// at the caller's discretion; the CPU neither catches nor retries, and any
/// state mutated before the fault remains mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("memory access error: {0}")]
pub struct MemoryAccessError(pub String);

impl MemoryAccessError {
    /// Builds an error for a failed read at `addr`.
    pub fn read_fault(addr: u16) -> Self {
        MemoryAccessError(format!("read fault at ${addr:04X}"))
    }

    /// Builds an error for a failed write at `addr`.
    pub fn write_fault(addr: u16) -> Self {
        MemoryAccessError(format!("write fault at ${addr:04X}"))
    }
}
