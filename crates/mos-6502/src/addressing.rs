//! Effective-address computation and stack access.
//!
//! The indirect modes reproduce the NMOS hardware quirks: zero-page
//! pointers wrap within page zero, and an absolute-indirect pointer at
//! a page boundary ($xxFF) fetches its high byte from the start of the
//! same page rather than the next one.

use emu_core::Bus;

use crate::{AddressingMode, Mos6502};

impl Mos6502 {
    /// Read a little-endian word.
    pub(crate) fn read_word(bus: &mut impl Bus, address: u16) -> u16 {
        let lo = bus.read(address);
        let hi = bus.read(address.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Read a little-endian word from a zero-page pointer. The high
    /// byte comes from `(pointer + 1) & $FF`, so a pointer at $FF
    /// wraps to $00.
    fn read_word_zero_page(bus: &mut impl Bus, pointer: u8) -> u16 {
        let lo = bus.read(u16::from(pointer));
        let hi = bus.read(u16::from(pointer.wrapping_add(1)));
        u16::from_le_bytes([lo, hi])
    }

    /// Read a little-endian word with the JMP-indirect page-wrap bug:
    /// if the pointer sits at $xxFF, the high byte is fetched from
    /// $xx00 instead of crossing into the next page.
    pub(crate) fn read_word_page_wrapped(bus: &mut impl Bus, pointer: u16) -> u16 {
        let lo = bus.read(pointer);
        let hi_addr = (pointer & 0xFF00) | u16::from((pointer as u8).wrapping_add(1));
        let hi = bus.read(hi_addr);
        u16::from_le_bytes([lo, hi])
    }

    /// Effective address for a memory-operand addressing mode.
    ///
    /// Only meaningful for modes that name a memory location; the
    /// caller handles implied, accumulator, immediate, and relative.
    pub(crate) fn effective_address(
        &self,
        bus: &mut impl Bus,
        mode: AddressingMode,
        operands: [u8; 2],
    ) -> u16 {
        let abs = u16::from_le_bytes(operands);
        match mode {
            AddressingMode::ZeroPage => u16::from(operands[0]),
            AddressingMode::ZeroPageX => u16::from(operands[0].wrapping_add(self.regs.x)),
            AddressingMode::ZeroPageY => u16::from(operands[0].wrapping_add(self.regs.y)),
            AddressingMode::Absolute => abs,
            AddressingMode::AbsoluteX => abs.wrapping_add(u16::from(self.regs.x)),
            AddressingMode::AbsoluteY => abs.wrapping_add(u16::from(self.regs.y)),
            AddressingMode::AbsoluteIndirect => Self::read_word_page_wrapped(bus, abs),
            AddressingMode::IndexedIndirect => {
                let pointer = operands[0].wrapping_add(self.regs.x);
                Self::read_word_zero_page(bus, pointer)
            }
            AddressingMode::IndirectIndexed => {
                let base = Self::read_word_zero_page(bus, operands[0]);
                base.wrapping_add(u16::from(self.regs.y))
            }
            AddressingMode::Implied
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => self.regs.pc,
        }
    }

    /// Fetch the operand value for a read-modify or read-only operation.
    pub(crate) fn read_operand(
        &mut self,
        bus: &mut impl Bus,
        mode: AddressingMode,
        operands: [u8; 2],
    ) -> u8 {
        match mode {
            AddressingMode::Accumulator => self.regs.a,
            AddressingMode::Immediate => operands[0],
            AddressingMode::Relative => {
                let target = Self::relative_target(self.regs.pc, operands[0]);
                bus.read(target)
            }
            AddressingMode::Implied => 0,
            _ => {
                let address = self.effective_address(bus, mode, operands);
                bus.read(address)
            }
        }
    }

    /// Store a result back through the addressing mode. Writes to an
    /// immediate operand are invalid and dropped.
    pub(crate) fn write_operand(
        &mut self,
        bus: &mut impl Bus,
        mode: AddressingMode,
        operands: [u8; 2],
        value: u8,
    ) {
        match mode {
            AddressingMode::Accumulator => self.regs.a = value,
            AddressingMode::Implied | AddressingMode::Immediate | AddressingMode::Relative => {}
            _ => {
                let address = self.effective_address(bus, mode, operands);
                bus.write(address, value);
            }
        }
    }

    /// Branch target: the instruction address plus a signed offset.
    pub(crate) fn relative_target(pc: u16, offset: u8) -> u16 {
        pc.wrapping_add_signed(i16::from(offset as i8))
    }

    /// Push a byte at $0100|S, then decrement S with 8-bit wrap.
    pub(crate) fn push(&mut self, bus: &mut impl Bus, value: u8) {
        bus.write(0x0100 | u16::from(self.regs.s), value);
        self.regs.s = self.regs.s.wrapping_sub(1);
    }

    /// Increment S with 8-bit wrap, then read the byte at $0100|S.
    pub(crate) fn pull(&mut self, bus: &mut impl Bus) -> u8 {
        self.regs.s = self.regs.s.wrapping_add(1);
        bus.read(0x0100 | u16::from(self.regs.s))
    }

    /// Push a word high byte first, so a pull reads low byte first.
    pub(crate) fn push_word(&mut self, bus: &mut impl Bus, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(bus, hi);
        self.push(bus, lo);
    }

    pub(crate) fn pull_word(&mut self, bus: &mut impl Bus) -> u16 {
        let lo = self.pull(bus);
        let hi = self.pull(bus);
        u16::from_le_bytes([lo, hi])
    }
}

#[cfg(test)]
mod tests {
    use emu_core::{Bus, SimpleBus};

    use super::*;

    #[test]
    fn zero_page_indexed_wraps_within_page_zero() {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new();
        cpu.regs.x = 0x10;
        let addr = cpu.effective_address(&mut bus, AddressingMode::ZeroPageX, [0xF8, 0]);
        assert_eq!(addr, 0x0008);
    }

    #[test]
    fn indexed_indirect_pointer_wraps_at_page_edge() {
        let mut bus = SimpleBus::new();
        bus.write(0x00FF, 0x34);
        bus.write(0x0000, 0x12);
        let mut cpu = Mos6502::new();
        cpu.regs.x = 0x0F;
        let addr = cpu.effective_address(&mut bus, AddressingMode::IndexedIndirect, [0xF0, 0]);
        assert_eq!(addr, 0x1234);
    }

    #[test]
    fn indirect_indexed_adds_y_after_pointer_fetch() {
        let mut bus = SimpleBus::new();
        bus.write(0x0080, 0x00);
        bus.write(0x0081, 0x40);
        let mut cpu = Mos6502::new();
        cpu.regs.y = 0x05;
        let addr = cpu.effective_address(&mut bus, AddressingMode::IndirectIndexed, [0x80, 0]);
        assert_eq!(addr, 0x4005);
    }

    #[test]
    fn absolute_indirect_reproduces_page_wrap_bug() {
        let mut bus = SimpleBus::new();
        bus.write(0x02FF, 0x00);
        bus.write(0x0200, 0x80);
        bus.write(0x0300, 0xFF);
        let cpu = Mos6502::new();
        let addr = cpu.effective_address(&mut bus, AddressingMode::AbsoluteIndirect, [0xFF, 0x02]);
        assert_eq!(addr, 0x8000);
    }

    #[test]
    fn stack_pointer_wraps_both_directions() {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new();
        cpu.regs.s = 0x00;
        cpu.push(&mut bus, 0xAB);
        assert_eq!(cpu.regs.s, 0xFF);
        assert_eq!(bus.peek(0x0100), 0xAB);
        assert_eq!(cpu.pull(&mut bus), 0xAB);
        assert_eq!(cpu.regs.s, 0x00);
    }

    #[test]
    fn relative_target_is_signed() {
        assert_eq!(Mos6502::relative_target(0x1000, 0x10), 0x1010);
        assert_eq!(Mos6502::relative_target(0x1000, 0xFE), 0x0FFE);
    }
}
