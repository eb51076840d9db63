//! Memory bus interface.

/// Memory and I/O bus interface.
///
/// Components access memory and peripherals through this trait. The bus
/// handles address decoding and routing to the appropriate device. The
/// address space is always 16 bits; unmapped regions read as 0 and drop
/// writes rather than failing.
///
/// Reads may have side effects (the Famicom PPU status register clears
/// its vblank flag when read), so `read` takes `&mut self`. Buses that
/// want a side-effect-free debug view expose an inherent `peek` method.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);
}

/// Flat 64 KiB RAM bus with no mapped peripherals.
///
/// Used by CPU unit tests and the conformance harness, where every
/// address is plain RAM.
pub struct SimpleBus {
    ram: Box<[u8; 0x10000]>,
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x10000]),
        }
    }

    /// Copy `data` into RAM starting at `start`.
    pub fn load(&mut self, start: u16, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            self.ram[(start as usize + i) & 0xFFFF] = byte;
        }
    }

    /// Read without side effects (there are none here, but tests use
    /// the same name across bus types).
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }
}
