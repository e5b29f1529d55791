//! Fuzz target for the step loop.
//!
//! Builds an arbitrary machine state and instruction stream, executes one
//! instruction, and checks the invariants that must hold after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{Cpu, FlatRam, OPCODE_TABLE};

/// Arbitrary CPU register and flag state.
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Arbitrary memory contents for the regions an instruction can touch.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction + operand bytes at the program counter.
    instruction_bytes: [u8; 3],
    /// Zero page, for the indirect and zero-page modes.
    zero_page: [u8; 256],
    /// Stack page.
    stack_page: [u8; 256],
    /// A window of main memory at 0x4000 for absolute modes.
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut ram = FlatRam::new();

    ram.load(0xFFFC, &[0x00, 0x02]); // reset vector
    ram.load(0xFFFE, &[0x00, 0x90]); // IRQ/BRK vector

    ram.load(0x0200, &input.memory.instruction_bytes);
    ram.load(0x0000, &input.memory.zero_page);
    ram.load(0x0100, &input.memory.stack_page);
    ram.load(0x4000, &input.memory.main_memory);

    let mut cpu = Cpu::new(ram);
    cpu.reset().expect("flat RAM cannot fault");

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let opcode = input.memory.instruction_bytes[0];

    cpu.step().expect("flat RAM cannot fault");

    // bit 5 of the packed status always reads 1
    assert_eq!(cpu.status() & 0x20, 0x20);

    // the opcode trap fires exactly for undocumented opcodes
    assert_eq!(
        cpu.op_trap(),
        OPCODE_TABLE[opcode as usize].mnemonic.is_none()
    );
});
