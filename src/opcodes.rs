//! # Opcode Metadata Table
//!
//! The 256-entry table that is the single source of truth for instruction
//! decoding: mnemonic, addressing mode and total size for each opcode byte.
//!
//! - **151 documented instructions** carry a [`Mnemonic`] and their real
//!   addressing mode and size.
//! - **105 illegal/undocumented opcodes** carry no mnemonic and decode as
//!   1-byte instructions; executing one raises the CPU's opcode trap.

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

impl Mnemonic {
    /// The canonical upper-case assembly name.
    pub fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC", Bcs => "BCS",
            Beq => "BEQ", Bit => "BIT", Bmi => "BMI", Bne => "BNE", Bpl => "BPL",
            Brk => "BRK", Bvc => "BVC", Bvs => "BVS", Clc => "CLC", Cld => "CLD",
            Cli => "CLI", Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR", Inc => "INC",
            Inx => "INX", Iny => "INY", Jmp => "JMP", Jsr => "JSR", Lda => "LDA",
            Ldx => "LDX", Ldy => "LDY", Lsr => "LSR", Nop => "NOP", Ora => "ORA",
            Pha => "PHA", Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC", Sec => "SEC",
            Sed => "SED", Sei => "SEI", Sta => "STA", Stx => "STX", Sty => "STY",
            Tax => "TAX", Tay => "TAY", Tsx => "TSX", Txa => "TXA", Txs => "TXS",
            Tya => "TYA",
        }
    }
}

/// Static decode metadata for a single opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic; `None` for illegal/undocumented opcodes.
    pub mnemonic: Option<Mnemonic>,

    /// Addressing mode this opcode decodes with.
    pub mode: AddressingMode,

    /// Total instruction size in bytes, opcode included (1, 2 or 3).
    pub size: u8,
}

/// Size in bytes of the instruction starting with opcode `op`.
///
/// Illegal opcodes decode as size 1, so the PC advances past the opcode
/// byte and nothing else.
pub fn instruction_size(op: u8) -> u8 {
    OPCODE_TABLE[op as usize].size
}

/// Addressing mode of the instruction starting with opcode `op`.
pub fn instruction_mode(op: u8) -> AddressingMode {
    OPCODE_TABLE[op as usize].mode
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, size: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: Some(mnemonic),
        mode,
        size,
    }
}

const ILL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: None,
    mode: AddressingMode::Implicit,
    size: 1,
};

use AddressingMode::*;
use Mnemonic::*;

/// Complete decode table indexed by opcode byte.
///
/// This one array carries both 256-entry tables the decoder needs (sizes and
/// addressing modes) along with the dispatch mnemonic; [`instruction_size`]
/// and [`instruction_mode`] are thin views over it.
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op(Brk, Implicit, 1),    op(Ora, IndirectX, 2),   ILL,                     ILL,
    ILL,                     op(Ora, ZeroPage, 2),    op(Asl, ZeroPage, 2),    ILL,
    op(Php, Implicit, 1),    op(Ora, Immediate, 2),   op(Asl, Accumulator, 1), ILL,
    ILL,                     op(Ora, Absolute, 3),    op(Asl, Absolute, 3),    ILL,
    // 0x10
    op(Bpl, Relative, 2),    op(Ora, IndirectY, 2),   ILL,                     ILL,
    ILL,                     op(Ora, ZeroPageX, 2),   op(Asl, ZeroPageX, 2),   ILL,
    op(Clc, Implicit, 1),    op(Ora, AbsoluteY, 3),   ILL,                     ILL,
    ILL,                     op(Ora, AbsoluteX, 3),   op(Asl, AbsoluteX, 3),   ILL,
    // 0x20
    op(Jsr, Absolute, 3),    op(And, IndirectX, 2),   ILL,                     ILL,
    op(Bit, ZeroPage, 2),    op(And, ZeroPage, 2),    op(Rol, ZeroPage, 2),    ILL,
    op(Plp, Implicit, 1),    op(And, Immediate, 2),   op(Rol, Accumulator, 1), ILL,
    op(Bit, Absolute, 3),    op(And, Absolute, 3),    op(Rol, Absolute, 3),    ILL,
    // 0x30
    op(Bmi, Relative, 2),    op(And, IndirectY, 2),   ILL,                     ILL,
    ILL,                     op(And, ZeroPageX, 2),   op(Rol, ZeroPageX, 2),   ILL,
    op(Sec, Implicit, 1),    op(And, AbsoluteY, 3),   ILL,                     ILL,
    ILL,                     op(And, AbsoluteX, 3),   op(Rol, AbsoluteX, 3),   ILL,
    // 0x40
    op(Rti, Implicit, 1),    op(Eor, IndirectX, 2),   ILL,                     ILL,
    ILL,                     op(Eor, ZeroPage, 2),    op(Lsr, ZeroPage, 2),    ILL,
    op(Pha, Implicit, 1),    op(Eor, Immediate, 2),   op(Lsr, Accumulator, 1), ILL,
    op(Jmp, Absolute, 3),    op(Eor, Absolute, 3),    op(Lsr, Absolute, 3),    ILL,
    // 0x50
    op(Bvc, Relative, 2),    op(Eor, IndirectY, 2),   ILL,                     ILL,
    ILL,                     op(Eor, ZeroPageX, 2),   op(Lsr, ZeroPageX, 2),   ILL,
    op(Cli, Implicit, 1),    op(Eor, AbsoluteY, 3),   ILL,                     ILL,
    ILL,                     op(Eor, AbsoluteX, 3),   op(Lsr, AbsoluteX, 3),   ILL,
    // 0x60
    op(Rts, Implicit, 1),    op(Adc, IndirectX, 2),   ILL,                     ILL,
    ILL,                     op(Adc, ZeroPage, 2),    op(Ror, ZeroPage, 2),    ILL,
    op(Pla, Implicit, 1),    op(Adc, Immediate, 2),   op(Ror, Accumulator, 1), ILL,
    op(Jmp, Indirect, 3),    op(Adc, Absolute, 3),    op(Ror, Absolute, 3),    ILL,
    // 0x70
    op(Bvs, Relative, 2),    op(Adc, IndirectY, 2),   ILL,                     ILL,
    ILL,                     op(Adc, ZeroPageX, 2),   op(Ror, ZeroPageX, 2),   ILL,
    op(Sei, Implicit, 1),    op(Adc, AbsoluteY, 3),   ILL,                     ILL,
    ILL,                     op(Adc, AbsoluteX, 3),   op(Ror, AbsoluteX, 3),   ILL,
    // 0x80
    ILL,                     op(Sta, IndirectX, 2),   ILL,                     ILL,
    op(Sty, ZeroPage, 2),    op(Sta, ZeroPage, 2),    op(Stx, ZeroPage, 2),    ILL,
    op(Dey, Implicit, 1),    ILL,                     op(Txa, Implicit, 1),    ILL,
    op(Sty, Absolute, 3),    op(Sta, Absolute, 3),    op(Stx, Absolute, 3),    ILL,
    // 0x90
    op(Bcc, Relative, 2),    op(Sta, IndirectY, 2),   ILL,                     ILL,
    op(Sty, ZeroPageX, 2),   op(Sta, ZeroPageX, 2),   op(Stx, ZeroPageY, 2),   ILL,
    op(Tya, Implicit, 1),    op(Sta, AbsoluteY, 3),   op(Txs, Implicit, 1),    ILL,
    ILL,                     op(Sta, AbsoluteX, 3),   ILL,                     ILL,
    // 0xA0
    op(Ldy, Immediate, 2),   op(Lda, IndirectX, 2),   op(Ldx, Immediate, 2),   ILL,
    op(Ldy, ZeroPage, 2),    op(Lda, ZeroPage, 2),    op(Ldx, ZeroPage, 2),    ILL,
    op(Tay, Implicit, 1),    op(Lda, Immediate, 2),   op(Tax, Implicit, 1),    ILL,
    op(Ldy, Absolute, 3),    op(Lda, Absolute, 3),    op(Ldx, Absolute, 3),    ILL,
    // 0xB0
    op(Bcs, Relative, 2),    op(Lda, IndirectY, 2),   ILL,                     ILL,
    op(Ldy, ZeroPageX, 2),   op(Lda, ZeroPageX, 2),   op(Ldx, ZeroPageY, 2),   ILL,
    op(Clv, Implicit, 1),    op(Lda, AbsoluteY, 3),   op(Tsx, Implicit, 1),    ILL,
    op(Ldy, AbsoluteX, 3),   op(Lda, AbsoluteX, 3),   op(Ldx, AbsoluteY, 3),   ILL,
    // 0xC0
    op(Cpy, Immediate, 2),   op(Cmp, IndirectX, 2),   ILL,                     ILL,
    op(Cpy, ZeroPage, 2),    op(Cmp, ZeroPage, 2),    op(Dec, ZeroPage, 2),    ILL,
    op(Iny, Implicit, 1),    op(Cmp, Immediate, 2),   op(Dex, Implicit, 1),    ILL,
    op(Cpy, Absolute, 3),    op(Cmp, Absolute, 3),    op(Dec, Absolute, 3),    ILL,
    // 0xD0
    op(Bne, Relative, 2),    op(Cmp, IndirectY, 2),   ILL,                     ILL,
    ILL,                     op(Cmp, ZeroPageX, 2),   op(Dec, ZeroPageX, 2),   ILL,
    op(Cld, Implicit, 1),    op(Cmp, AbsoluteY, 3),   ILL,                     ILL,
    ILL,                     op(Cmp, AbsoluteX, 3),   op(Dec, AbsoluteX, 3),   ILL,
    // 0xE0
    op(Cpx, Immediate, 2),   op(Sbc, IndirectX, 2),   ILL,                     ILL,
    op(Cpx, ZeroPage, 2),    op(Sbc, ZeroPage, 2),    op(Inc, ZeroPage, 2),    ILL,
    op(Inx, Implicit, 1),    op(Sbc, Immediate, 2),   op(Nop, Implicit, 1),    ILL,
    op(Cpx, Absolute, 3),    op(Sbc, Absolute, 3),    op(Inc, Absolute, 3),    ILL,
    // 0xF0
    op(Beq, Relative, 2),    op(Sbc, IndirectY, 2),   ILL,                     ILL,
    ILL,                     op(Sbc, ZeroPageX, 2),   op(Inc, ZeroPageX, 2),   ILL,
    op(Sed, Implicit, 1),    op(Sbc, AbsoluteY, 3),   ILL,                     ILL,
    ILL,                     op(Sbc, AbsoluteX, 3),   op(Inc, AbsoluteX, 3),   ILL,
];
