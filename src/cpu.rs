//! # CPU State and Execution
//!
//! The [`Cpu`] struct carries the complete architectural state of the 6502 -
//! A, X, Y, PC, SP, the instruction register and the seven status flags -
//! and drives the fetch-decode-execute loop one instruction at a time.
//!
//! ## Execution Model
//!
//! - [`Cpu::reset`] loads the PC through the reset vector and puts the
//!   status word into its power-on state.
//! - [`Cpu::step`] executes exactly one instruction. Bus faults abort the
//!   step mid-flight; whatever was already written stays written.
//! - [`Cpu::step_n`] is the batch form; the first fault aborts the batch.
//!
//! The CPU is generic over its [`Bus`] and owns it. There is no interior
//! locking: a host stepping the CPU from multiple threads must serialize
//! externally.

use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::opcodes::{instruction_mode, instruction_size, Mnemonic, OPCODE_TABLE};
use crate::{AddressingMode, Bus, MemoryAccessError};
use log::{debug, trace};
use std::fmt;

/// NMI vector, low byte. Declared for hosts; this core does not dispatch NMI.
pub const NMI_VECTOR_L: u16 = 0xFFFA;
/// NMI vector, high byte.
pub const NMI_VECTOR_H: u16 = 0xFFFB;
/// Reset vector, low byte. Read by [`Cpu::reset`].
pub const RST_VECTOR_L: u16 = 0xFFFC;
/// Reset vector, high byte.
pub const RST_VECTOR_H: u16 = 0xFFFD;
/// IRQ/BRK vector, low byte. Read by the BRK instruction.
pub const IRQ_VECTOR_L: u16 = 0xFFFE;
/// IRQ/BRK vector, high byte.
pub const IRQ_VECTOR_H: u16 = 0xFFFF;

/// Conventional load address for small programs (start of page 2, just
/// above the stack).
pub const DEFAULT_BASE_ADDRESS: u16 = 0x0200;

/// 6502 CPU state and execution engine, generic over the memory bus.
///
/// # Examples
///
/// ```
/// use sim6502::{Cpu, FlatRam};
///
/// let mut ram = FlatRam::new();
/// ram.load(0xFFFC, &[0x00, 0x02]); // reset vector -> 0x0200
/// ram.load(0x0200, &[0xE8]);       // INX
///
/// let mut cpu = Cpu::new(ram);
/// cpu.reset().unwrap();
/// cpu.step().unwrap();
/// assert_eq!(cpu.x(), 1);
/// ```
pub struct Cpu<B: Bus> {
    /// Accumulator.
    pub(crate) a: u8,
    /// X index register.
    pub(crate) x: u8,
    /// Y index register.
    pub(crate) y: u8,
    /// Program counter.
    pub(crate) pc: u16,
    /// Stack pointer, an offset into page 1 (stack top = 0x0100 + SP).
    pub(crate) sp: u8,
    /// Instruction register: the most recently fetched opcode.
    pub(crate) ir: u8,
    /// Operand bytes of the current instruction.
    pub(crate) args: [u8; 2],
    /// Address the current instruction was fetched from.
    pub(crate) addr: u16,
    /// Raised when an unrecognized opcode is decoded.
    pub(crate) op_trap: bool,

    pub(crate) flag_c: bool,
    pub(crate) flag_z: bool,
    pub(crate) flag_i: bool,
    pub(crate) flag_d: bool,
    pub(crate) flag_b: bool,
    pub(crate) flag_v: bool,
    pub(crate) flag_n: bool,

    pub(crate) bus: B,
}

impl<B: Bus> Cpu<B> {
    /// Creates a CPU wired to `bus`.
    ///
    /// No bus access happens here; registers and flags start zeroed with
    /// SP = 0xFF. Call [`Cpu::reset`] to load the PC through the reset
    /// vector before stepping.
    pub fn new(bus: B) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xFF,
            ir: 0,
            args: [0, 0],
            addr: 0,
            op_trap: false,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
            bus,
        }
    }

    /// Replaces the bus, returning the previous one.
    pub fn set_bus(&mut self, bus: B) -> B {
        std::mem::replace(&mut self.bus, bus)
    }

    /// Shared access to the bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the bus (e.g. for loading programs in tests).
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the CPU and releases its bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Resets the CPU to its power-on state.
    ///
    /// SP ← 0xFF, IR ← 0; C, I, D, B and V are cleared; the opcode trap is
    /// cleared; PC is loaded from the reset vector at 0xFFFC/0xFFFD.
    /// A, X, Y, N and Z keep whatever they held (undefined on real
    /// hardware).
    pub fn reset(&mut self) -> Result<(), MemoryAccessError> {
        self.sp = 0xFF;

        let lo = self.bus.read(RST_VECTOR_L)?;
        let hi = self.bus.read(RST_VECTOR_H)?;
        self.pc = address(lo, hi);

        self.ir = 0;

        self.flag_c = false;
        self.flag_i = false;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;

        self.op_trap = false;

        Ok(())
    }

    /// Executes exactly one instruction.
    ///
    /// Fetches the opcode at PC, reads its operand bytes, resolves the
    /// operand per the addressing mode, and dispatches to the handler.
    /// Decoding an opcode outside the documented 151 raises the opcode trap
    /// and performs no other side effect - the host decides whether to halt,
    /// log or continue.
    pub fn step(&mut self) -> Result<(), MemoryAccessError> {
        self.addr = self.pc;

        self.ir = self.bus.read(self.pc)?;
        self.increment_pc();

        self.op_trap = false;

        let size = instruction_size(self.ir);
        self.args = [0, 0];
        for i in 0..(size as usize - 1) {
            self.args[i] = self.bus.read(self.pc)?;
            self.increment_pc();
        }

        match OPCODE_TABLE[self.ir as usize].mnemonic {
            Some(mnemonic) => self.execute(mnemonic)?,
            None => {
                self.op_trap = true;
                debug!("illegal opcode ${:02X} at ${:04X}", self.ir, self.addr);
            }
        }

        trace!("{}", self);
        Ok(())
    }

    /// Executes `count` instructions; the first bus fault aborts the batch.
    pub fn step_n(&mut self, count: usize) -> Result<(), MemoryAccessError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    fn execute(&mut self, mnemonic: Mnemonic) -> Result<(), MemoryAccessError> {
        use Mnemonic::*;
        match mnemonic {
            Adc => alu::execute_adc(self)?,
            And => alu::execute_and(self)?,
            Asl => shifts::execute_asl(self)?,
            Bcc => branches::execute_bcc(self),
            Bcs => branches::execute_bcs(self),
            Beq => branches::execute_beq(self),
            Bit => alu::execute_bit(self)?,
            Bmi => branches::execute_bmi(self),
            Bne => branches::execute_bne(self),
            Bpl => branches::execute_bpl(self),
            Brk => control::execute_brk(self)?,
            Bvc => branches::execute_bvc(self),
            Bvs => branches::execute_bvs(self),
            Clc => flags::execute_clc(self),
            Cld => flags::execute_cld(self),
            Cli => flags::execute_cli(self),
            Clv => flags::execute_clv(self),
            Cmp => alu::execute_cmp(self)?,
            Cpx => alu::execute_cpx(self)?,
            Cpy => alu::execute_cpy(self)?,
            Dec => inc_dec::execute_dec(self)?,
            Dex => inc_dec::execute_dex(self),
            Dey => inc_dec::execute_dey(self),
            Eor => alu::execute_eor(self)?,
            Inc => inc_dec::execute_inc(self)?,
            Inx => inc_dec::execute_inx(self),
            Iny => inc_dec::execute_iny(self),
            Jmp => control::execute_jmp(self)?,
            Jsr => control::execute_jsr(self)?,
            Lda => load_store::execute_lda(self)?,
            Ldx => load_store::execute_ldx(self)?,
            Ldy => load_store::execute_ldy(self)?,
            Lsr => shifts::execute_lsr(self)?,
            Nop => control::execute_nop(self),
            Ora => alu::execute_ora(self)?,
            Pha => stack::execute_pha(self)?,
            Php => stack::execute_php(self)?,
            Pla => stack::execute_pla(self)?,
            Plp => stack::execute_plp(self)?,
            Rol => shifts::execute_rol(self)?,
            Ror => shifts::execute_ror(self)?,
            Rti => control::execute_rti(self)?,
            Rts => control::execute_rts(self)?,
            Sbc => alu::execute_sbc(self)?,
            Sec => flags::execute_sec(self),
            Sed => flags::execute_sed(self),
            Sei => flags::execute_sei(self),
            Sta => load_store::execute_sta(self)?,
            Stx => load_store::execute_stx(self)?,
            Sty => load_store::execute_sty(self)?,
            Tax => transfer::execute_tax(self),
            Tay => transfer::execute_tay(self),
            Tsx => transfer::execute_tsx(self),
            Txa => transfer::execute_txa(self),
            Txs => transfer::execute_txs(self),
            Tya => transfer::execute_tya(self),
        }
        Ok(())
    }

    // ========== Operand resolution ==========

    /// Resolves the effective address of the current instruction's operand.
    ///
    /// Only meaningful for modes that name a memory location. The two
    /// zero-page indirect modes dereference a *single* pointer byte: (zp,X)
    /// uses the byte at `(args[0]+X) & 0xFF` as the whole address (high byte
    /// zero), and (zp),Y adds Y to the byte at `args[0]`. Do not "fix" this
    /// to a two-byte pointer fetch; existing hosts depend on it.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> Result<u16, MemoryAccessError> {
        use AddressingMode::*;
        match mode {
            ZeroPage => Ok(self.args[0] as u16),
            ZeroPageX => Ok(self.zpx_address(self.args[0])),
            ZeroPageY => Ok(self.zpy_address(self.args[0])),
            Absolute => Ok(address(self.args[0], self.args[1])),
            AbsoluteX => Ok(self.x_address(self.args[0], self.args[1])),
            AbsoluteY => Ok(self.y_address(self.args[0], self.args[1])),
            IndirectX => {
                let ptr = self.zpx_address(self.args[0]);
                Ok(self.bus.read(ptr)? as u16)
            }
            IndirectY => {
                let base = self.bus.read(self.args[0] as u16)? as u16;
                Ok(base.wrapping_add(self.y as u16))
            }
            Implicit | Accumulator | Immediate | Relative | Indirect => {
                panic!("no effective address for addressing mode {mode:?}")
            }
        }
    }

    /// Resolves the current instruction's operand value.
    pub(crate) fn operand(&mut self, mode: AddressingMode) -> Result<u8, MemoryAccessError> {
        match mode {
            AddressingMode::Immediate => Ok(self.args[0]),
            AddressingMode::Accumulator => Ok(self.a),
            _ => {
                let addr = self.operand_address(mode)?;
                self.bus.read(addr)
            }
        }
    }

    /// Addressing mode of the instruction currently in IR.
    pub(crate) fn ir_mode(&self) -> AddressingMode {
        instruction_mode(self.ir)
    }

    // ========== Address arithmetic ==========

    pub(crate) fn increment_pc(&mut self) {
        self.pc = self.pc.wrapping_add(1);
    }

    /// Zero Page,X address: wraps within the zero page.
    pub(crate) fn zpx_address(&self, zp: u8) -> u16 {
        zp.wrapping_add(self.x) as u16
    }

    /// Zero Page,Y address: wraps within the zero page.
    pub(crate) fn zpy_address(&self, zp: u8) -> u16 {
        zp.wrapping_add(self.y) as u16
    }

    /// Absolute,X address.
    pub(crate) fn x_address(&self, lo: u8, hi: u8) -> u16 {
        address(lo, hi).wrapping_add(self.x as u16)
    }

    /// Absolute,Y address.
    pub(crate) fn y_address(&self, lo: u8, hi: u8) -> u16 {
        address(lo, hi).wrapping_add(self.y as u16)
    }

    /// Branch target: PC (already past the branch) plus the signed offset.
    pub(crate) fn rel_address(&self, offset: u8) -> u16 {
        self.pc.wrapping_add_signed(offset as i8 as i16)
    }

    // ========== Stack discipline ==========

    /// Pushes a byte: writes 0x0100+SP, then decrements SP (0x00 wraps to
    /// 0xFF). The first push after reset therefore lands at 0x01FF.
    pub fn stack_push(&mut self, data: u8) -> Result<(), MemoryAccessError> {
        self.bus.write(0x0100 | self.sp as u16, data)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Pops a byte: increments SP (0xFF wraps to 0x00), then reads 0x0100+SP.
    pub fn stack_pop(&mut self) -> Result<u8, MemoryAccessError> {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(0x0100 | self.sp as u16)
    }

    /// Reads the byte on top of the stack without moving SP.
    pub fn stack_peek(&mut self) -> Result<u8, MemoryAccessError> {
        self.bus.read(0x0100 | self.sp.wrapping_add(1) as u16)
    }

    // ========== ALU helpers ==========

    /// Add with carry, binary mode. Sets C, V, N and Z.
    ///
    /// The overflow computation mirrors the hardware: V is the XOR of the
    /// carries out of bit 6 and bit 7.
    pub(crate) fn adc(&mut self, acc: u8, operand: u8) -> u8 {
        let result = acc as u16 + operand as u16 + self.carry_bit() as u16;
        let carry6 = (acc & 0x7F) as u16 + (operand & 0x7F) as u16 + self.carry_bit() as u16;
        self.flag_c = result & 0x100 != 0;
        self.flag_v = self.flag_c ^ (carry6 & 0x80 != 0);
        let result = (result & 0xFF) as u8;
        self.set_arithmetic_flags(result);
        result
    }

    /// Subtract with carry (borrow), binary mode: ADC of the one's
    /// complement, which makes N, V, C and Z come out right with no extra
    /// logic.
    pub(crate) fn sbc(&mut self, acc: u8, operand: u8) -> u8 {
        self.adc(acc, !operand)
    }

    /// Add with carry, decimal (BCD) mode.
    ///
    /// Nybble-wise add with digit correction. C is the decimal carry-out and
    /// Z reflects the BCD result; N and V are forced false in decimal mode.
    pub(crate) fn adc_decimal(&mut self, acc: u8, operand: u8) -> u8 {
        let mut l = (acc & 0x0F) as u16 + (operand & 0x0F) as u16 + self.carry_bit() as u16;
        if (l & 0xFF) > 9 {
            l += 6;
        }
        let mut h = (acc >> 4) as u16 + (operand >> 4) as u16 + if l > 15 { 1 } else { 0 };
        if (h & 0xFF) > 9 {
            h += 6;
        }
        let result = ((l & 0x0F) | (h << 4)) & 0xFF;
        self.flag_c = h > 15;
        self.flag_z = result == 0;
        self.flag_n = false;
        self.flag_v = false;
        result as u8
    }

    /// Subtract with carry, decimal (BCD) mode. Mirror of [`Cpu::adc_decimal`]
    /// using subtraction; the borrow propagates when the low nybble
    /// underflows. N and V are forced false.
    pub(crate) fn sbc_decimal(&mut self, acc: u8, operand: u8) -> u8 {
        let mut l = (acc & 0x0F) as i16 - (operand & 0x0F) as i16 - (1 - self.carry_bit() as i16);
        if l & 0x10 != 0 {
            l -= 6;
        }
        let mut h =
            (acc >> 4) as i16 - (operand >> 4) as i16 - if l & 0x10 != 0 { 1 } else { 0 };
        if h & 0x10 != 0 {
            h -= 6;
        }
        let result = (l & 0x0F) | (h << 4);
        self.flag_c = (h & 0xFF) < 15;
        self.flag_z = result == 0;
        self.flag_n = false;
        self.flag_v = false;
        (result & 0xFF) as u8
    }

    /// Compare `reg` against `operand`, setting C, Z and N.
    ///
    /// N is derived from the sign of the unmasked difference - `true` only
    /// when `reg > operand` - not from bit 7 of the wrapped 8-bit
    /// difference. Hardware takes bit 7; this contract is frozen for
    /// compatibility with hosts that test against it.
    pub(crate) fn compare(&mut self, reg: u8, operand: u8) {
        self.flag_c = reg >= operand;
        self.flag_z = reg == operand;
        self.flag_n = (reg as i16 - operand as i16) > 0;
    }

    /// Shift left one bit. C takes the old bit 7.
    pub(crate) fn asl(&mut self, m: u8) -> u8 {
        self.flag_c = m & 0x80 != 0;
        m << 1
    }

    /// Shift right one bit, filling with zero. C takes the old bit 0.
    pub(crate) fn lsr(&mut self, m: u8) -> u8 {
        self.flag_c = m & 0x01 != 0;
        m >> 1
    }

    /// Rotate left through carry. Bit 0 takes the old carry; C takes the old
    /// bit 7.
    pub(crate) fn rol(&mut self, m: u8) -> u8 {
        let result = (m << 1) | self.carry_bit();
        self.flag_c = m & 0x80 != 0;
        result
    }

    /// Rotate right through carry. Bit 7 takes the old carry; C takes the old
    /// bit 0.
    pub(crate) fn ror(&mut self, m: u8) -> u8 {
        let result = (m >> 1) | (self.carry_bit() << 7);
        self.flag_c = m & 0x01 != 0;
        result
    }

    /// Sets N from bit 7 of `value` and Z from `value == 0`.
    pub(crate) fn set_arithmetic_flags(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    // ========== Registers ==========

    /// Accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Stack pointer. The stack top is at 0x0100 + SP and grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Instruction register: the opcode of the most recently executed
    /// instruction.
    pub fn ir(&self) -> u8 {
        self.ir
    }

    // ========== Opcode trap ==========

    /// True when the last decoded opcode was unrecognized.
    pub fn op_trap(&self) -> bool {
        self.op_trap
    }

    pub fn set_op_trap(&mut self) {
        self.op_trap = true;
    }

    pub fn clear_op_trap(&mut self) {
        self.op_trap = false;
    }

    // ========== Status flags ==========

    /// Carry flag.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// 1 if the carry flag is set, 0 if clear.
    pub fn carry_bit(&self) -> u8 {
        self.flag_c as u8
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Zero flag.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// 1 if the zero flag is set, 0 if clear.
    pub fn zero_bit(&self) -> u8 {
        self.flag_z as u8
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Interrupt disable flag.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// 1 if the interrupt disable flag is set, 0 if clear.
    pub fn irq_disable_bit(&self) -> u8 {
        self.flag_i as u8
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Decimal mode flag.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// 1 if the decimal mode flag is set, 0 if clear.
    pub fn decimal_bit(&self) -> u8 {
        self.flag_d as u8
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Break flag.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// 1 if the break flag is set, 0 if clear.
    pub fn break_bit(&self) -> u8 {
        self.flag_b as u8
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Overflow flag.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// 1 if the overflow flag is set, 0 if clear.
    pub fn overflow_bit(&self) -> u8 {
        self.flag_v as u8
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Negative flag.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// 1 if the negative flag is set, 0 if clear.
    pub fn negative_bit(&self) -> u8 {
        self.flag_n as u8
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Packed status register, NV-BDIZC. Bit 5 always reads 1.
    pub fn status(&self) -> u8 {
        let mut status = 0x20;
        if self.flag_c {
            status |= P_CARRY;
        }
        if self.flag_z {
            status |= P_ZERO;
        }
        if self.flag_i {
            status |= P_IRQ_DISABLE;
        }
        if self.flag_d {
            status |= P_DECIMAL;
        }
        if self.flag_b {
            status |= P_BREAK;
        }
        if self.flag_v {
            status |= P_OVERFLOW;
        }
        if self.flag_n {
            status |= P_NEGATIVE;
        }
        status
    }

    /// Unpacks `value` into the seven semantic flags. Bit 5 is ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_c = value & P_CARRY != 0;
        self.flag_z = value & P_ZERO != 0;
        self.flag_i = value & P_IRQ_DISABLE != 0;
        self.flag_d = value & P_DECIMAL != 0;
        self.flag_b = value & P_BREAK != 0;
        self.flag_v = value & P_OVERFLOW != 0;
        self.flag_n = value & P_NEGATIVE != 0;
    }

    /// Renders the flags as `[NV-BDIZC]`: each position shows its letter
    /// when set and `.` when clear; bit 5 always renders as `-`.
    pub fn status_register_string(&self) -> String {
        format!(
            "[{}{}-{}{}{}{}{}]",
            if self.flag_n { 'N' } else { '.' },
            if self.flag_v { 'V' } else { '.' },
            if self.flag_b { 'B' } else { '.' },
            if self.flag_d { 'D' } else { '.' },
            if self.flag_i { 'I' } else { '.' },
            if self.flag_z { 'Z' } else { '.' },
            if self.flag_c { 'C' } else { '.' },
        )
    }
}

/// One-line register dump: fetch address, disassembled opcode, registers and
/// flags. This is the line [`Cpu::step`] emits at trace level.
impl<B: Bus> fmt::Display for Cpu<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${:04X}   {:<14}A=${:02X}  X=${:02X}  Y=${:02X}  PC=${:04X}  P={}",
            self.addr,
            opcode_string(self.ir, self.args[0], self.args[1]),
            self.a,
            self.x,
            self.y,
            self.pc,
            self.status_register_string(),
        )
    }
}

// Status register bit positions (bit 5 is always 1).
const P_CARRY: u8 = 0x01;
const P_ZERO: u8 = 0x02;
const P_IRQ_DISABLE: u8 = 0x04;
const P_DECIMAL: u8 = 0x08;
const P_BREAK: u8 = 0x10;
const P_OVERFLOW: u8 = 0x40;
const P_NEGATIVE: u8 = 0x80;

/// Combines a low and a high byte into a 16-bit address.
pub(crate) fn address(lo: u8, hi: u8) -> u16 {
    (hi as u16) << 8 | lo as u16
}

/// Formats an opcode and its operand bytes as assembly.
///
/// Absolute operands render as ` $nnnn`, immediates as ` #$nn`; every other
/// mode renders as the bare mnemonic. Unrecognized opcodes render as `???`.
pub fn opcode_string(op: u8, arg0: u8, arg1: u8) -> String {
    let meta = &OPCODE_TABLE[op as usize];
    let Some(mnemonic) = meta.mnemonic else {
        return "???".to_string();
    };

    match meta.mode {
        AddressingMode::Absolute => format!("{} ${:04X}", mnemonic.name(), address(arg0, arg1)),
        AddressingMode::Immediate => format!("{} #${:02X}", mnemonic.name(), arg0),
        _ => mnemonic.name().to_string(),
    }
}
