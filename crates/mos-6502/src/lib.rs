//! Instruction-level MOS 6502 emulator.
//!
//! Executes whole instructions against an [`emu_core::Bus`]. Decoding
//! is table-driven: each opcode byte maps to an operation kind, a
//! target register, and an addressing mode, and a single executor
//! interprets the decoded descriptor. Documented NMOS quirks are
//! reproduced (indirect page-wrap bugs, stack pointer wraparound, the
//! status-byte B/unused handling on push and pull).
//!
//! Undocumented opcodes halt the CPU rather than guessing at their
//! behavior.

mod addressing;
mod execute;
pub mod flags;
mod opcode;
mod registers;

pub use flags::Status;
pub use opcode::{decode, AddressingMode, Instruction, Operation, Target, OPCODES};
pub use registers::Registers;

use emu_core::{Bus, Cpu};
use log::warn;

/// NMI handler address lives here.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// PC is loaded from here on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// BRK and IRQ handler address lives here.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Read-only record of the most recently executed instruction, for
/// tracing and debugger frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutedInstruction {
    /// Address the opcode was fetched from.
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    /// Raw operand bytes; unused positions are zero.
    pub operands: [u8; 2],
}

/// A MOS 6502 CPU.
///
/// Registers are public so harnesses and machines can inject state
/// directly. All memory traffic goes through the bus passed to each
/// call, so one CPU type serves every platform.
#[derive(Debug, Clone)]
pub struct Mos6502 {
    pub regs: Registers,
    running: bool,
    branch_taken: bool,
    last_instruction: Option<ExecutedInstruction>,
}

impl Mos6502 {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            running: true,
            branch_taken: false,
            last_instruction: None,
        }
    }

    /// The last instruction executed by [`Cpu::step`], if any.
    #[must_use]
    pub fn last_instruction(&self) -> Option<&ExecutedInstruction> {
        self.last_instruction.as_ref()
    }

    // Inherent copies of the trait accessors, so callers holding a
    // concrete `Mos6502` don't have to pin down the bus type.
    #[must_use]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bus> Cpu<B> for Mos6502 {
    fn step(&mut self, bus: &mut B) {
        if !self.running {
            return;
        }

        let pc = self.regs.pc;
        let opcode = bus.read(pc);
        let instruction = decode(opcode);
        if instruction.operation == Operation::Unimplemented {
            warn!("unimplemented opcode ${opcode:02X} at ${pc:04X}; halting");
            self.running = false;
            return;
        }

        let mut operands = [0u8; 2];
        let operand_len = instruction.mode.operand_len();
        if operand_len >= 1 {
            operands[0] = bus.read(pc.wrapping_add(1));
        }
        if operand_len == 2 {
            operands[1] = bus.read(pc.wrapping_add(2));
        }

        // Control-flow operations set branch_taken to suppress the
        // length-based advance below.
        self.branch_taken = false;
        self.execute(bus, &instruction, operands);
        self.last_instruction = Some(ExecutedInstruction {
            address: pc,
            opcode,
            mnemonic: instruction.mnemonic,
            mode: instruction.mode,
            operands,
        });

        // Advance from the current PC, not the fetch address: a taken
        // conditional branch has already moved PC by its offset and
        // still receives the two-byte advance on top.
        if !self.branch_taken {
            self.regs.pc = self.regs.pc.wrapping_add(instruction.mode.instruction_len());
        }
    }

    fn reset(&mut self, bus: &mut B) {
        self.regs = Registers::new();
        self.regs.pc = Self::read_word(bus, RESET_VECTOR);
        self.running = true;
        self.branch_taken = false;
        self.last_instruction = None;
    }

    fn nmi(&mut self, bus: &mut B) {
        self.push_word(bus, self.regs.pc);
        let status = self.regs.p.to_interrupt_byte();
        self.push(bus, status);
        self.regs.pc = Self::read_word(bus, NMI_VECTOR);
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
