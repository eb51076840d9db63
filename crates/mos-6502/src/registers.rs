//! 6502 register file.

use crate::Status;

/// The 6502 register set.
///
/// - A: accumulator
/// - X, Y: index registers
/// - S: stack pointer (stack lives at $0100-$01FF)
/// - PC: program counter
/// - P: processor status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub s: u8,
    pub pc: u16,
    pub p: Status,
}

impl Registers {
    /// Registers in cold-reset state. PC is loaded from the reset
    /// vector by the reset sequence, not here.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0xFD,
            pc: 0,
            p: Status::new(),
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
