//! Instruction execution.

use emu_core::Bus;

use crate::{flags, Instruction, Mos6502, Operation, Status, Target, IRQ_VECTOR};

impl Mos6502 {
    pub(crate) fn reg(&self, target: Target) -> u8 {
        match target {
            Target::A => self.regs.a,
            Target::X => self.regs.x,
            Target::Y => self.regs.y,
            Target::S => self.regs.s,
            Target::P => self.regs.p.0,
            Target::None => 0,
        }
    }

    pub(crate) fn set_reg(&mut self, target: Target, value: u8) {
        match target {
            Target::A => self.regs.a = value,
            Target::X => self.regs.x = value,
            Target::Y => self.regs.y = value,
            Target::S => self.regs.s = value,
            Target::P => self.regs.p = Status::from_byte(value),
            Target::None => {}
        }
    }

    #[allow(clippy::too_many_lines)]
    pub(crate) fn execute(
        &mut self,
        bus: &mut impl Bus,
        instruction: &Instruction,
        operands: [u8; 2],
    ) {
        let mode = instruction.mode;
        match instruction.operation {
            Operation::Load => {
                let value = self.read_operand(bus, mode, operands);
                self.set_reg(instruction.target, value);
                self.regs.p.update_nz(value);
            }
            Operation::Store => {
                let value = self.reg(instruction.target);
                self.write_operand(bus, mode, operands, value);
            }
            Operation::TransferA
            | Operation::TransferX
            | Operation::TransferY
            | Operation::TransferS => {
                let value = match instruction.operation {
                    Operation::TransferA => self.regs.a,
                    Operation::TransferX => self.regs.x,
                    Operation::TransferY => self.regs.y,
                    _ => self.regs.s,
                };
                self.set_reg(instruction.target, value);
                // TXS is the one transfer that leaves the flags alone.
                if instruction.target != Target::S {
                    self.regs.p.update_nz(value);
                }
            }
            Operation::Add => {
                let operand = self.read_operand(bus, mode, operands);
                self.add_with_carry(operand);
            }
            Operation::Subtract => {
                let operand = self.read_operand(bus, mode, operands);
                self.subtract_with_carry(operand);
            }
            Operation::And => {
                self.regs.a &= self.read_operand(bus, mode, operands);
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Or => {
                self.regs.a |= self.read_operand(bus, mode, operands);
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Xor => {
                self.regs.a ^= self.read_operand(bus, mode, operands);
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Compare => {
                let operand = self.read_operand(bus, mode, operands);
                let register = self.reg(instruction.target);
                self.regs.p.assign(flags::C, register >= operand);
                self.regs.p.update_nz(register.wrapping_sub(operand));
            }
            Operation::BitTest => {
                let operand = self.read_operand(bus, mode, operands);
                self.regs.p.assign(flags::Z, self.regs.a & operand == 0);
                self.regs.p.assign(flags::N, operand & 0x80 != 0);
                self.regs.p.assign(flags::V, operand & 0x40 != 0);
            }
            Operation::IncrementMem => {
                let value = self.read_operand(bus, mode, operands).wrapping_add(1);
                self.write_operand(bus, mode, operands, value);
                self.regs.p.update_nz(value);
            }
            Operation::DecrementMem => {
                let value = self.read_operand(bus, mode, operands).wrapping_sub(1);
                self.write_operand(bus, mode, operands, value);
                self.regs.p.update_nz(value);
            }
            Operation::IncrementReg => {
                let value = self.reg(instruction.target).wrapping_add(1);
                self.set_reg(instruction.target, value);
                self.regs.p.update_nz(value);
            }
            Operation::DecrementReg => {
                let value = self.reg(instruction.target).wrapping_sub(1);
                self.set_reg(instruction.target, value);
                self.regs.p.update_nz(value);
            }
            Operation::ShiftLeft => {
                let value = self.read_operand(bus, mode, operands);
                let result = value << 1;
                self.write_operand(bus, mode, operands, result);
                self.regs.p.assign(flags::C, value & 0x80 != 0);
                self.regs.p.update_nz(result);
            }
            Operation::ShiftRight => {
                let value = self.read_operand(bus, mode, operands);
                let result = value >> 1;
                self.write_operand(bus, mode, operands, result);
                self.regs.p.assign(flags::C, value & 0x01 != 0);
                self.regs.p.update_nz(result);
            }
            Operation::RotateLeft => {
                let value = self.read_operand(bus, mode, operands);
                let result = (value << 1) | u8::from(self.regs.p.is_set(flags::C));
                self.write_operand(bus, mode, operands, result);
                self.regs.p.assign(flags::C, value & 0x80 != 0);
                self.regs.p.update_nz(result);
            }
            Operation::RotateRight => {
                let value = self.read_operand(bus, mode, operands);
                let result = (value >> 1) | (u8::from(self.regs.p.is_set(flags::C)) << 7);
                self.write_operand(bus, mode, operands, result);
                self.regs.p.assign(flags::C, value & 0x01 != 0);
                self.regs.p.update_nz(result);
            }
            Operation::Jump => {
                self.regs.pc = self.effective_address(bus, mode, operands);
                self.branch_taken = true;
            }
            Operation::JumpSubroutine => {
                // The pushed return address is the JSR's last byte;
                // RTS adds one when it pulls.
                let return_address = self.regs.pc.wrapping_add(2);
                self.push_word(bus, return_address);
                self.regs.pc = u16::from_le_bytes(operands);
                self.branch_taken = true;
            }
            Operation::ReturnSubroutine => {
                self.regs.pc = self.pull_word(bus).wrapping_add(1);
                self.branch_taken = true;
            }
            Operation::ReturnInterrupt => {
                let status = self.pull(bus);
                self.regs.p = Status::from_pull(status);
                self.regs.pc = self.pull_word(bus);
                self.branch_taken = true;
            }
            Operation::BranchIfSet | Operation::BranchIfClear => {
                let want = instruction.operation == Operation::BranchIfSet;
                if self.regs.p.is_set(instruction.flag) == want {
                    // PC still gets the normal two-byte advance after
                    // this; offsets are relative to the next instruction.
                    self.regs.pc = Self::relative_target(self.regs.pc, operands[0]);
                }
            }
            Operation::Push => {
                let value = if instruction.target == Target::P {
                    self.regs.p.to_pushed_byte()
                } else {
                    self.reg(instruction.target)
                };
                self.push(bus, value);
            }
            Operation::Pull => {
                let value = self.pull(bus);
                if instruction.target == Target::P {
                    self.regs.p = Status::from_pull(value);
                } else {
                    self.set_reg(instruction.target, value);
                    self.regs.p.update_nz(value);
                }
            }
            Operation::SetFlag => self.regs.p.set(instruction.flag),
            Operation::ClearFlag => self.regs.p.clear(instruction.flag),
            Operation::Break => {
                let return_address = self.regs.pc.wrapping_add(2);
                self.push_word(bus, return_address);
                let status = self.regs.p.to_pushed_byte();
                self.push(bus, status);
                self.regs.p.set(flags::I);
                self.regs.pc = Self::read_word(bus, IRQ_VECTOR);
                self.branch_taken = true;
            }
            Operation::Nop => {}
            // Caught by step() before execution.
            Operation::Unimplemented => {}
        }
    }

    fn add_with_carry(&mut self, operand: u8) {
        if self.regs.p.is_set(flags::D) {
            self.adc_decimal(operand);
        } else {
            self.adc_binary(operand);
        }
    }

    fn subtract_with_carry(&mut self, operand: u8) {
        if self.regs.p.is_set(flags::D) {
            self.sbc_decimal(operand);
        } else {
            // Binary SBC is ADC of the one's complement.
            self.adc_binary(!operand);
        }
    }

    fn adc_binary(&mut self, operand: u8) {
        let carry = u16::from(self.regs.p.is_set(flags::C));
        let sum = u16::from(self.regs.a) + u16::from(operand) + carry;
        let result = (sum & 0xFF) as u8;
        self.regs.p.assign(flags::C, sum > 0xFF);
        self.regs.p.assign(
            flags::V,
            (self.regs.a ^ result) & (operand ^ result) & 0x80 != 0,
        );
        self.regs.a = result;
        self.regs.p.update_nz(result);
    }

    /// NMOS BCD addition. Z reflects the binary sum; N and V reflect
    /// the intermediate before the high-nibble fixup.
    fn adc_decimal(&mut self, operand: u8) {
        let carry = u16::from(self.regs.p.is_set(flags::C));
        let a = u16::from(self.regs.a);
        let op = u16::from(operand);

        let binary = a + op + carry;
        self.regs.p.assign(flags::Z, binary & 0xFF == 0);

        let mut lo = (a & 0x0F) + (op & 0x0F) + carry;
        if lo > 0x09 {
            lo = ((lo + 0x06) & 0x0F) + 0x10;
        }
        let mut sum = (a & 0xF0) + (op & 0xF0) + lo;
        self.regs.p.assign(flags::N, sum & 0x80 != 0);
        self.regs.p.assign(flags::V, (a ^ sum) & (op ^ sum) & 0x80 != 0);
        if sum >= 0xA0 {
            sum += 0x60;
        }
        self.regs.p.assign(flags::C, sum > 0xFF);
        self.regs.a = (sum & 0xFF) as u8;
    }

    /// NMOS BCD subtraction. All four flags follow the binary
    /// subtraction; only the accumulator gets the decimal result.
    fn sbc_decimal(&mut self, operand: u8) {
        let carry = i16::from(self.regs.p.is_set(flags::C));
        let a = i16::from(self.regs.a);
        let op = i16::from(operand);

        let mut lo = (a & 0x0F) - (op & 0x0F) - (1 - carry);
        if lo < 0 {
            lo = ((lo - 0x06) & 0x0F) - 0x10;
        }
        let mut sum = (a & 0xF0) - (op & 0xF0) + lo;
        if sum < 0 {
            sum -= 0x60;
        }

        self.adc_binary(!operand);
        self.regs.a = (sum & 0xFF) as u8;
    }
}
