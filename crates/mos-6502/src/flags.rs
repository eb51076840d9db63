//! 6502 processor status register (P).

/// Carry flag.
pub const C: u8 = 0x01;

/// Zero flag.
pub const Z: u8 = 0x02;

/// Interrupt disable.
pub const I: u8 = 0x04;

/// Decimal mode - BCD arithmetic for ADC/SBC.
pub const D: u8 = 0x08;

/// Break flag - only meaningful in the copy of P pushed to the stack:
/// set by BRK/PHP, clear when an interrupt pushes the status.
pub const B: u8 = 0x10;

/// Unused bit - always reads as 1.
pub const U: u8 = 0x20;

/// Overflow flag.
pub const V: u8 = 0x40;

/// Negative flag - bit 7 of the last result.
pub const N: u8 = 0x80;

/// Processor status register.
///
/// The unused bit is kept set at every boundary where the register is
/// materialized (reset, pull from stack, external assignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(pub u8);

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

impl Status {
    /// Status at cold reset: only the unused bit set.
    #[must_use]
    pub const fn new() -> Self {
        Self(U)
    }

    /// Build status from a raw byte, forcing the unused bit on.
    #[must_use]
    pub const fn from_byte(value: u8) -> Self {
        Self(value | U)
    }

    /// Build status from a byte pulled off the stack (PLP/RTI): the
    /// break bit is discarded, the unused bit forced on.
    #[must_use]
    pub const fn from_pull(value: u8) -> Self {
        Self((value | U) & !B)
    }

    /// Raw byte as pushed by BRK/PHP: break and unused both set.
    #[must_use]
    pub const fn to_pushed_byte(self) -> u8 {
        self.0 | U | B
    }

    /// Raw byte as pushed by NMI/IRQ entry: unused set, break clear.
    #[must_use]
    pub const fn to_interrupt_byte(self) -> u8 {
        (self.0 | U) & !B
    }

    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    pub fn clear(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    /// Set or clear a flag from a condition.
    pub fn assign(&mut self, flag: u8, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }

    /// Update N and Z from an 8-bit result.
    pub fn update_nz(&mut self, value: u8) {
        self.assign(N, value & 0x80 != 0);
        self.assign(Z, value == 0);
    }
}
