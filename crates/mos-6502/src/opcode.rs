//! Opcode decoding.
//!
//! Decode is a single indexed load from a 256-entry const table. Every
//! documented opcode maps to an [`Instruction`] descriptor; the
//! remaining entries decode to [`Operation::Unimplemented`], which
//! halts the CPU when stepped.

use crate::flags;

/// The thirteen 6502 addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    Relative,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    AbsoluteIndirect,
    IndexedIndirect,
    IndirectIndexed,
}

impl AddressingMode {
    /// Operand bytes following the opcode.
    #[must_use]
    pub const fn operand_len(self) -> u16 {
        match self {
            Self::Implied | Self::Accumulator => 0,
            Self::Immediate
            | Self::Relative
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::IndexedIndirect
            | Self::IndirectIndexed => 1,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY | Self::AbsoluteIndirect => 2,
        }
    }

    /// Total instruction length including the opcode byte.
    #[must_use]
    pub const fn instruction_len(self) -> u16 {
        1 + self.operand_len()
    }
}

/// What an instruction does, independent of where its operand comes
/// from. Several mnemonics share a kind and differ only in [`Target`]
/// or addressing mode (LDA/LDX/LDY are all `Load`, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Store,
    TransferA,
    TransferX,
    TransferY,
    TransferS,
    Add,
    Subtract,
    And,
    Or,
    Xor,
    Compare,
    BitTest,
    IncrementMem,
    DecrementMem,
    IncrementReg,
    DecrementReg,
    ShiftLeft,
    ShiftRight,
    RotateLeft,
    RotateRight,
    Jump,
    JumpSubroutine,
    ReturnSubroutine,
    ReturnInterrupt,
    BranchIfSet,
    BranchIfClear,
    Push,
    Pull,
    SetFlag,
    ClearFlag,
    Break,
    Nop,
    Unimplemented,
}

/// Register an operation reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    A,
    X,
    Y,
    S,
    P,
    None,
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub operation: Operation,
    pub target: Target,
    pub mode: AddressingMode,
    /// Status mask for flag and branch operations, zero otherwise.
    pub flag: u8,
    pub mnemonic: &'static str,
    pub opcode: u8,
}

/// Decode an opcode byte.
#[must_use]
pub fn decode(opcode: u8) -> Instruction {
    OPCODES[opcode as usize]
}

const fn ins(
    operation: Operation,
    target: Target,
    mode: AddressingMode,
    mnemonic: &'static str,
) -> Instruction {
    Instruction {
        operation,
        target,
        mode,
        flag: 0,
        mnemonic,
        opcode: 0,
    }
}

const fn imp(operation: Operation, target: Target, mnemonic: &'static str) -> Instruction {
    ins(operation, target, AddressingMode::Implied, mnemonic)
}

const fn flag_ins(operation: Operation, flag: u8, mnemonic: &'static str) -> Instruction {
    Instruction {
        operation,
        target: Target::None,
        mode: AddressingMode::Implied,
        flag,
        mnemonic,
        opcode: 0,
    }
}

const fn branch(operation: Operation, flag: u8, mnemonic: &'static str) -> Instruction {
    Instruction {
        operation,
        target: Target::None,
        mode: AddressingMode::Relative,
        flag,
        mnemonic,
        opcode: 0,
    }
}

/// Decode table for all 256 opcode bytes.
pub static OPCODES: [Instruction; 256] = build_table();

#[allow(clippy::too_many_lines)]
const fn build_table() -> [Instruction; 256] {
    use self::AddressingMode as M;
    use self::Operation as Op;
    use self::Target as T;

    let mut t = [imp(Op::Unimplemented, T::None, "???"); 256];

    t[0xA9] = ins(Op::Load, T::A, M::Immediate, "LDA");
    t[0xA5] = ins(Op::Load, T::A, M::ZeroPage, "LDA");
    t[0xB5] = ins(Op::Load, T::A, M::ZeroPageX, "LDA");
    t[0xAD] = ins(Op::Load, T::A, M::Absolute, "LDA");
    t[0xBD] = ins(Op::Load, T::A, M::AbsoluteX, "LDA");
    t[0xB9] = ins(Op::Load, T::A, M::AbsoluteY, "LDA");
    t[0xA1] = ins(Op::Load, T::A, M::IndexedIndirect, "LDA");
    t[0xB1] = ins(Op::Load, T::A, M::IndirectIndexed, "LDA");

    t[0xA2] = ins(Op::Load, T::X, M::Immediate, "LDX");
    t[0xA6] = ins(Op::Load, T::X, M::ZeroPage, "LDX");
    t[0xB6] = ins(Op::Load, T::X, M::ZeroPageY, "LDX");
    t[0xAE] = ins(Op::Load, T::X, M::Absolute, "LDX");
    t[0xBE] = ins(Op::Load, T::X, M::AbsoluteY, "LDX");

    t[0xA0] = ins(Op::Load, T::Y, M::Immediate, "LDY");
    t[0xA4] = ins(Op::Load, T::Y, M::ZeroPage, "LDY");
    t[0xB4] = ins(Op::Load, T::Y, M::ZeroPageX, "LDY");
    t[0xAC] = ins(Op::Load, T::Y, M::Absolute, "LDY");
    t[0xBC] = ins(Op::Load, T::Y, M::AbsoluteX, "LDY");

    t[0x85] = ins(Op::Store, T::A, M::ZeroPage, "STA");
    t[0x95] = ins(Op::Store, T::A, M::ZeroPageX, "STA");
    t[0x8D] = ins(Op::Store, T::A, M::Absolute, "STA");
    t[0x9D] = ins(Op::Store, T::A, M::AbsoluteX, "STA");
    t[0x99] = ins(Op::Store, T::A, M::AbsoluteY, "STA");
    t[0x81] = ins(Op::Store, T::A, M::IndexedIndirect, "STA");
    t[0x91] = ins(Op::Store, T::A, M::IndirectIndexed, "STA");

    t[0x86] = ins(Op::Store, T::X, M::ZeroPage, "STX");
    t[0x96] = ins(Op::Store, T::X, M::ZeroPageY, "STX");
    t[0x8E] = ins(Op::Store, T::X, M::Absolute, "STX");

    t[0x84] = ins(Op::Store, T::Y, M::ZeroPage, "STY");
    t[0x94] = ins(Op::Store, T::Y, M::ZeroPageX, "STY");
    t[0x8C] = ins(Op::Store, T::Y, M::Absolute, "STY");

    t[0xAA] = imp(Op::TransferA, T::X, "TAX");
    t[0xA8] = imp(Op::TransferA, T::Y, "TAY");
    t[0x8A] = imp(Op::TransferX, T::A, "TXA");
    t[0x98] = imp(Op::TransferY, T::A, "TYA");
    t[0xBA] = imp(Op::TransferS, T::X, "TSX");
    t[0x9A] = imp(Op::TransferX, T::S, "TXS");

    t[0x48] = imp(Op::Push, T::A, "PHA");
    t[0x08] = imp(Op::Push, T::P, "PHP");
    t[0x68] = imp(Op::Pull, T::A, "PLA");
    t[0x28] = imp(Op::Pull, T::P, "PLP");

    t[0x69] = ins(Op::Add, T::A, M::Immediate, "ADC");
    t[0x65] = ins(Op::Add, T::A, M::ZeroPage, "ADC");
    t[0x75] = ins(Op::Add, T::A, M::ZeroPageX, "ADC");
    t[0x6D] = ins(Op::Add, T::A, M::Absolute, "ADC");
    t[0x7D] = ins(Op::Add, T::A, M::AbsoluteX, "ADC");
    t[0x79] = ins(Op::Add, T::A, M::AbsoluteY, "ADC");
    t[0x61] = ins(Op::Add, T::A, M::IndexedIndirect, "ADC");
    t[0x71] = ins(Op::Add, T::A, M::IndirectIndexed, "ADC");

    t[0xE9] = ins(Op::Subtract, T::A, M::Immediate, "SBC");
    t[0xE5] = ins(Op::Subtract, T::A, M::ZeroPage, "SBC");
    t[0xF5] = ins(Op::Subtract, T::A, M::ZeroPageX, "SBC");
    t[0xED] = ins(Op::Subtract, T::A, M::Absolute, "SBC");
    t[0xFD] = ins(Op::Subtract, T::A, M::AbsoluteX, "SBC");
    t[0xF9] = ins(Op::Subtract, T::A, M::AbsoluteY, "SBC");
    t[0xE1] = ins(Op::Subtract, T::A, M::IndexedIndirect, "SBC");
    t[0xF1] = ins(Op::Subtract, T::A, M::IndirectIndexed, "SBC");

    t[0xC9] = ins(Op::Compare, T::A, M::Immediate, "CMP");
    t[0xC5] = ins(Op::Compare, T::A, M::ZeroPage, "CMP");
    t[0xD5] = ins(Op::Compare, T::A, M::ZeroPageX, "CMP");
    t[0xCD] = ins(Op::Compare, T::A, M::Absolute, "CMP");
    t[0xDD] = ins(Op::Compare, T::A, M::AbsoluteX, "CMP");
    t[0xD9] = ins(Op::Compare, T::A, M::AbsoluteY, "CMP");
    t[0xC1] = ins(Op::Compare, T::A, M::IndexedIndirect, "CMP");
    t[0xD1] = ins(Op::Compare, T::A, M::IndirectIndexed, "CMP");

    t[0xE0] = ins(Op::Compare, T::X, M::Immediate, "CPX");
    t[0xE4] = ins(Op::Compare, T::X, M::ZeroPage, "CPX");
    t[0xEC] = ins(Op::Compare, T::X, M::Absolute, "CPX");

    t[0xC0] = ins(Op::Compare, T::Y, M::Immediate, "CPY");
    t[0xC4] = ins(Op::Compare, T::Y, M::ZeroPage, "CPY");
    t[0xCC] = ins(Op::Compare, T::Y, M::Absolute, "CPY");

    t[0x29] = ins(Op::And, T::A, M::Immediate, "AND");
    t[0x25] = ins(Op::And, T::A, M::ZeroPage, "AND");
    t[0x35] = ins(Op::And, T::A, M::ZeroPageX, "AND");
    t[0x2D] = ins(Op::And, T::A, M::Absolute, "AND");
    t[0x3D] = ins(Op::And, T::A, M::AbsoluteX, "AND");
    t[0x39] = ins(Op::And, T::A, M::AbsoluteY, "AND");
    t[0x21] = ins(Op::And, T::A, M::IndexedIndirect, "AND");
    t[0x31] = ins(Op::And, T::A, M::IndirectIndexed, "AND");

    t[0x09] = ins(Op::Or, T::A, M::Immediate, "ORA");
    t[0x05] = ins(Op::Or, T::A, M::ZeroPage, "ORA");
    t[0x15] = ins(Op::Or, T::A, M::ZeroPageX, "ORA");
    t[0x0D] = ins(Op::Or, T::A, M::Absolute, "ORA");
    t[0x1D] = ins(Op::Or, T::A, M::AbsoluteX, "ORA");
    t[0x19] = ins(Op::Or, T::A, M::AbsoluteY, "ORA");
    t[0x01] = ins(Op::Or, T::A, M::IndexedIndirect, "ORA");
    t[0x11] = ins(Op::Or, T::A, M::IndirectIndexed, "ORA");

    t[0x49] = ins(Op::Xor, T::A, M::Immediate, "EOR");
    t[0x45] = ins(Op::Xor, T::A, M::ZeroPage, "EOR");
    t[0x55] = ins(Op::Xor, T::A, M::ZeroPageX, "EOR");
    t[0x4D] = ins(Op::Xor, T::A, M::Absolute, "EOR");
    t[0x5D] = ins(Op::Xor, T::A, M::AbsoluteX, "EOR");
    t[0x59] = ins(Op::Xor, T::A, M::AbsoluteY, "EOR");
    t[0x41] = ins(Op::Xor, T::A, M::IndexedIndirect, "EOR");
    t[0x51] = ins(Op::Xor, T::A, M::IndirectIndexed, "EOR");

    t[0x24] = ins(Op::BitTest, T::A, M::ZeroPage, "BIT");
    t[0x2C] = ins(Op::BitTest, T::A, M::Absolute, "BIT");

    t[0x0A] = ins(Op::ShiftLeft, T::A, M::Accumulator, "ASL");
    t[0x06] = ins(Op::ShiftLeft, T::None, M::ZeroPage, "ASL");
    t[0x16] = ins(Op::ShiftLeft, T::None, M::ZeroPageX, "ASL");
    t[0x0E] = ins(Op::ShiftLeft, T::None, M::Absolute, "ASL");
    t[0x1E] = ins(Op::ShiftLeft, T::None, M::AbsoluteX, "ASL");

    t[0x4A] = ins(Op::ShiftRight, T::A, M::Accumulator, "LSR");
    t[0x46] = ins(Op::ShiftRight, T::None, M::ZeroPage, "LSR");
    t[0x56] = ins(Op::ShiftRight, T::None, M::ZeroPageX, "LSR");
    t[0x4E] = ins(Op::ShiftRight, T::None, M::Absolute, "LSR");
    t[0x5E] = ins(Op::ShiftRight, T::None, M::AbsoluteX, "LSR");

    t[0x2A] = ins(Op::RotateLeft, T::A, M::Accumulator, "ROL");
    t[0x26] = ins(Op::RotateLeft, T::None, M::ZeroPage, "ROL");
    t[0x36] = ins(Op::RotateLeft, T::None, M::ZeroPageX, "ROL");
    t[0x2E] = ins(Op::RotateLeft, T::None, M::Absolute, "ROL");
    t[0x3E] = ins(Op::RotateLeft, T::None, M::AbsoluteX, "ROL");

    t[0x6A] = ins(Op::RotateRight, T::A, M::Accumulator, "ROR");
    t[0x66] = ins(Op::RotateRight, T::None, M::ZeroPage, "ROR");
    t[0x76] = ins(Op::RotateRight, T::None, M::ZeroPageX, "ROR");
    t[0x6E] = ins(Op::RotateRight, T::None, M::Absolute, "ROR");
    t[0x7E] = ins(Op::RotateRight, T::None, M::AbsoluteX, "ROR");

    t[0xE6] = ins(Op::IncrementMem, T::None, M::ZeroPage, "INC");
    t[0xF6] = ins(Op::IncrementMem, T::None, M::ZeroPageX, "INC");
    t[0xEE] = ins(Op::IncrementMem, T::None, M::Absolute, "INC");
    t[0xFE] = ins(Op::IncrementMem, T::None, M::AbsoluteX, "INC");

    t[0xC6] = ins(Op::DecrementMem, T::None, M::ZeroPage, "DEC");
    t[0xD6] = ins(Op::DecrementMem, T::None, M::ZeroPageX, "DEC");
    t[0xCE] = ins(Op::DecrementMem, T::None, M::Absolute, "DEC");
    t[0xDE] = ins(Op::DecrementMem, T::None, M::AbsoluteX, "DEC");

    t[0xE8] = imp(Op::IncrementReg, T::X, "INX");
    t[0xC8] = imp(Op::IncrementReg, T::Y, "INY");
    t[0xCA] = imp(Op::DecrementReg, T::X, "DEX");
    t[0x88] = imp(Op::DecrementReg, T::Y, "DEY");

    t[0x4C] = ins(Op::Jump, T::None, M::Absolute, "JMP");
    t[0x6C] = ins(Op::Jump, T::None, M::AbsoluteIndirect, "JMP");
    t[0x20] = ins(Op::JumpSubroutine, T::None, M::Absolute, "JSR");
    t[0x60] = imp(Op::ReturnSubroutine, T::None, "RTS");
    t[0x40] = imp(Op::ReturnInterrupt, T::None, "RTI");

    t[0xB0] = branch(Op::BranchIfSet, flags::C, "BCS");
    t[0x90] = branch(Op::BranchIfClear, flags::C, "BCC");
    t[0xF0] = branch(Op::BranchIfSet, flags::Z, "BEQ");
    t[0xD0] = branch(Op::BranchIfClear, flags::Z, "BNE");
    t[0x30] = branch(Op::BranchIfSet, flags::N, "BMI");
    t[0x10] = branch(Op::BranchIfClear, flags::N, "BPL");
    t[0x70] = branch(Op::BranchIfSet, flags::V, "BVS");
    t[0x50] = branch(Op::BranchIfClear, flags::V, "BVC");

    t[0x38] = flag_ins(Op::SetFlag, flags::C, "SEC");
    t[0x18] = flag_ins(Op::ClearFlag, flags::C, "CLC");
    t[0x78] = flag_ins(Op::SetFlag, flags::I, "SEI");
    t[0x58] = flag_ins(Op::ClearFlag, flags::I, "CLI");
    t[0xF8] = flag_ins(Op::SetFlag, flags::D, "SED");
    t[0xD8] = flag_ins(Op::ClearFlag, flags::D, "CLD");
    t[0xB8] = flag_ins(Op::ClearFlag, flags::V, "CLV");

    t[0x00] = imp(Op::Break, T::None, "BRK");
    t[0xEA] = imp(Op::Nop, T::None, "NOP");

    let mut i = 0;
    while i < 256 {
        t[i].opcode = i as u8;
        i += 1;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::too_many_lines)]
    fn decode_matches_published_reference_table() {
        use super::AddressingMode::{
            Absolute, AbsoluteIndirect, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied,
            IndexedIndirect, IndirectIndexed, Relative, ZeroPage, ZeroPageX, ZeroPageY,
        };

        // All 151 documented opcodes with their mnemonic and mode.
        let reference: &[(u8, &str, AddressingMode)] = &[
            (0x00, "BRK", Implied),
            (0x01, "ORA", IndexedIndirect),
            (0x05, "ORA", ZeroPage),
            (0x06, "ASL", ZeroPage),
            (0x08, "PHP", Implied),
            (0x09, "ORA", Immediate),
            (0x0A, "ASL", Accumulator),
            (0x0D, "ORA", Absolute),
            (0x0E, "ASL", Absolute),
            (0x10, "BPL", Relative),
            (0x11, "ORA", IndirectIndexed),
            (0x15, "ORA", ZeroPageX),
            (0x16, "ASL", ZeroPageX),
            (0x18, "CLC", Implied),
            (0x19, "ORA", AbsoluteY),
            (0x1D, "ORA", AbsoluteX),
            (0x1E, "ASL", AbsoluteX),
            (0x20, "JSR", Absolute),
            (0x21, "AND", IndexedIndirect),
            (0x24, "BIT", ZeroPage),
            (0x25, "AND", ZeroPage),
            (0x26, "ROL", ZeroPage),
            (0x28, "PLP", Implied),
            (0x29, "AND", Immediate),
            (0x2A, "ROL", Accumulator),
            (0x2C, "BIT", Absolute),
            (0x2D, "AND", Absolute),
            (0x2E, "ROL", Absolute),
            (0x30, "BMI", Relative),
            (0x31, "AND", IndirectIndexed),
            (0x35, "AND", ZeroPageX),
            (0x36, "ROL", ZeroPageX),
            (0x38, "SEC", Implied),
            (0x39, "AND", AbsoluteY),
            (0x3D, "AND", AbsoluteX),
            (0x3E, "ROL", AbsoluteX),
            (0x40, "RTI", Implied),
            (0x41, "EOR", IndexedIndirect),
            (0x45, "EOR", ZeroPage),
            (0x46, "LSR", ZeroPage),
            (0x48, "PHA", Implied),
            (0x49, "EOR", Immediate),
            (0x4A, "LSR", Accumulator),
            (0x4C, "JMP", Absolute),
            (0x4D, "EOR", Absolute),
            (0x4E, "LSR", Absolute),
            (0x50, "BVC", Relative),
            (0x51, "EOR", IndirectIndexed),
            (0x55, "EOR", ZeroPageX),
            (0x56, "LSR", ZeroPageX),
            (0x58, "CLI", Implied),
            (0x59, "EOR", AbsoluteY),
            (0x5D, "EOR", AbsoluteX),
            (0x5E, "LSR", AbsoluteX),
            (0x60, "RTS", Implied),
            (0x61, "ADC", IndexedIndirect),
            (0x65, "ADC", ZeroPage),
            (0x66, "ROR", ZeroPage),
            (0x68, "PLA", Implied),
            (0x69, "ADC", Immediate),
            (0x6A, "ROR", Accumulator),
            (0x6C, "JMP", AbsoluteIndirect),
            (0x6D, "ADC", Absolute),
            (0x6E, "ROR", Absolute),
            (0x70, "BVS", Relative),
            (0x71, "ADC", IndirectIndexed),
            (0x75, "ADC", ZeroPageX),
            (0x76, "ROR", ZeroPageX),
            (0x78, "SEI", Implied),
            (0x79, "ADC", AbsoluteY),
            (0x7D, "ADC", AbsoluteX),
            (0x7E, "ROR", AbsoluteX),
            (0x81, "STA", IndexedIndirect),
            (0x84, "STY", ZeroPage),
            (0x85, "STA", ZeroPage),
            (0x86, "STX", ZeroPage),
            (0x88, "DEY", Implied),
            (0x8A, "TXA", Implied),
            (0x8C, "STY", Absolute),
            (0x8D, "STA", Absolute),
            (0x8E, "STX", Absolute),
            (0x90, "BCC", Relative),
            (0x91, "STA", IndirectIndexed),
            (0x94, "STY", ZeroPageX),
            (0x95, "STA", ZeroPageX),
            (0x96, "STX", ZeroPageY),
            (0x98, "TYA", Implied),
            (0x99, "STA", AbsoluteY),
            (0x9A, "TXS", Implied),
            (0x9D, "STA", AbsoluteX),
            (0xA0, "LDY", Immediate),
            (0xA1, "LDA", IndexedIndirect),
            (0xA2, "LDX", Immediate),
            (0xA4, "LDY", ZeroPage),
            (0xA5, "LDA", ZeroPage),
            (0xA6, "LDX", ZeroPage),
            (0xA8, "TAY", Implied),
            (0xA9, "LDA", Immediate),
            (0xAA, "TAX", Implied),
            (0xAC, "LDY", Absolute),
            (0xAD, "LDA", Absolute),
            (0xAE, "LDX", Absolute),
            (0xB0, "BCS", Relative),
            (0xB1, "LDA", IndirectIndexed),
            (0xB4, "LDY", ZeroPageX),
            (0xB5, "LDA", ZeroPageX),
            (0xB6, "LDX", ZeroPageY),
            (0xB8, "CLV", Implied),
            (0xB9, "LDA", AbsoluteY),
            (0xBA, "TSX", Implied),
            (0xBC, "LDY", AbsoluteX),
            (0xBD, "LDA", AbsoluteX),
            (0xBE, "LDX", AbsoluteY),
            (0xC0, "CPY", Immediate),
            (0xC1, "CMP", IndexedIndirect),
            (0xC4, "CPY", ZeroPage),
            (0xC5, "CMP", ZeroPage),
            (0xC6, "DEC", ZeroPage),
            (0xC8, "INY", Implied),
            (0xC9, "CMP", Immediate),
            (0xCA, "DEX", Implied),
            (0xCC, "CPY", Absolute),
            (0xCD, "CMP", Absolute),
            (0xCE, "DEC", Absolute),
            (0xD0, "BNE", Relative),
            (0xD1, "CMP", IndirectIndexed),
            (0xD5, "CMP", ZeroPageX),
            (0xD6, "DEC", ZeroPageX),
            (0xD8, "CLD", Implied),
            (0xD9, "CMP", AbsoluteY),
            (0xDD, "CMP", AbsoluteX),
            (0xDE, "DEC", AbsoluteX),
            (0xE0, "CPX", Immediate),
            (0xE1, "SBC", IndexedIndirect),
            (0xE4, "CPX", ZeroPage),
            (0xE5, "SBC", ZeroPage),
            (0xE6, "INC", ZeroPage),
            (0xE8, "INX", Implied),
            (0xE9, "SBC", Immediate),
            (0xEA, "NOP", Implied),
            (0xEC, "CPX", Absolute),
            (0xED, "SBC", Absolute),
            (0xEE, "INC", Absolute),
            (0xF0, "BEQ", Relative),
            (0xF1, "SBC", IndirectIndexed),
            (0xF5, "SBC", ZeroPageX),
            (0xF6, "INC", ZeroPageX),
            (0xF8, "SED", Implied),
            (0xF9, "SBC", AbsoluteY),
            (0xFD, "SBC", AbsoluteX),
            (0xFE, "INC", AbsoluteX),
        ];
        assert_eq!(reference.len(), 151);

        for &(opcode, mnemonic, mode) in reference {
            let ins = decode(opcode);
            assert_eq!(ins.mnemonic, mnemonic, "opcode ${opcode:02X}");
            assert_eq!(ins.mode, mode, "opcode ${opcode:02X}");
            assert_ne!(
                ins.operation,
                Operation::Unimplemented,
                "opcode ${opcode:02X}"
            );
        }

        // Everything outside the reference list decodes to the halt
        // sentinel.
        let documented: std::collections::HashSet<u8> =
            reference.iter().map(|&(opcode, _, _)| opcode).collect();
        for opcode in 0..=255u8 {
            if !documented.contains(&opcode) {
                assert_eq!(
                    decode(opcode).operation,
                    Operation::Unimplemented,
                    "opcode ${opcode:02X}"
                );
            }
        }
    }

    #[test]
    fn opcode_field_matches_table_index() {
        for (i, ins) in OPCODES.iter().enumerate() {
            assert_eq!(usize::from(ins.opcode), i);
        }
    }

    #[test]
    fn spot_check_decode() {
        let lda = decode(0xA9);
        assert_eq!(lda.mnemonic, "LDA");
        assert_eq!(lda.mode, AddressingMode::Immediate);
        assert_eq!(lda.target, Target::A);

        let jmp = decode(0x6C);
        assert_eq!(jmp.mnemonic, "JMP");
        assert_eq!(jmp.mode, AddressingMode::AbsoluteIndirect);

        let txs = decode(0x9A);
        assert_eq!(txs.operation, Operation::TransferX);
        assert_eq!(txs.target, Target::S);

        let bcs = decode(0xB0);
        assert_eq!(bcs.operation, Operation::BranchIfSet);
        assert_eq!(bcs.flag, flags::C);
        assert_eq!(bcs.mode, AddressingMode::Relative);

        assert_eq!(decode(0x02).operation, Operation::Unimplemented);
    }

    #[test]
    fn instruction_lengths_by_mode() {
        assert_eq!(decode(0xEA).mode.instruction_len(), 1);
        assert_eq!(decode(0x0A).mode.instruction_len(), 1);
        assert_eq!(decode(0xA9).mode.instruction_len(), 2);
        assert_eq!(decode(0xD0).mode.instruction_len(), 2);
        assert_eq!(decode(0xB1).mode.instruction_len(), 2);
        assert_eq!(decode(0xAD).mode.instruction_len(), 3);
        assert_eq!(decode(0x6C).mode.instruction_len(), 3);
    }
}
