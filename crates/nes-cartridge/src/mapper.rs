//! Cartridge mappers.
//!
//! A mapper translates addresses into offsets within the cartridge's
//! PRG and CHR data and reacts to writes into cartridge space (bank
//! switching). The cartridge owns the ROM bytes; mappers hold only
//! bank state.

use std::fmt::Debug;

const PRG_BANK_SIZE: usize = 0x4000;
const CHR_BANK_SIZE: usize = 0x2000;

pub trait Mapper: Debug {
    /// Offset into PRG ROM for a CPU address in $8000-$FFFF.
    fn prg_offset(&self, prg_len: usize, address: u16) -> usize;

    /// CPU write into $8000-$FFFF. Bank-switching mappers latch the
    /// value; NROM ignores it.
    fn prg_write(&mut self, address: u16, value: u8);

    /// Offset into CHR for a PPU pattern-table address ($0000-$1FFF).
    fn chr_offset(&self, address: u16) -> usize;
}

/// Mapper 0. No banking: 16 KiB PRG is mirrored across the 32 KiB
/// window, 32 KiB maps straight through.
#[derive(Debug, Default)]
pub struct Nrom;

impl Mapper for Nrom {
    fn prg_offset(&self, prg_len: usize, address: u16) -> usize {
        let offset = usize::from(address - 0x8000);
        if prg_len <= PRG_BANK_SIZE {
            offset % PRG_BANK_SIZE
        } else {
            offset
        }
    }

    fn prg_write(&mut self, _address: u16, _value: u8) {}

    fn chr_offset(&self, address: u16) -> usize {
        usize::from(address)
    }
}

/// Mapper 2. Switchable 16 KiB PRG bank at $8000-$BFFF, last bank
/// fixed at $C000-$FFFF.
#[derive(Debug, Default)]
pub struct UxRom {
    bank: u8,
}

impl Mapper for UxRom {
    fn prg_offset(&self, prg_len: usize, address: u16) -> usize {
        let offset = usize::from(address & 0x3FFF);
        if address < 0xC000 {
            usize::from(self.bank) * PRG_BANK_SIZE + offset
        } else {
            prg_len - PRG_BANK_SIZE + offset
        }
    }

    fn prg_write(&mut self, _address: u16, value: u8) {
        self.bank = value & 0x0F;
    }

    fn chr_offset(&self, address: u16) -> usize {
        usize::from(address)
    }
}

/// Mapper 3. PRG as NROM, switchable 8 KiB CHR bank.
#[derive(Debug, Default)]
pub struct Cnrom {
    bank: u8,
}

impl Mapper for Cnrom {
    fn prg_offset(&self, prg_len: usize, address: u16) -> usize {
        Nrom.prg_offset(prg_len, address)
    }

    fn prg_write(&mut self, _address: u16, value: u8) {
        self.bank = value & 0x03;
    }

    fn chr_offset(&self, address: u16) -> usize {
        usize::from(self.bank) * CHR_BANK_SIZE + usize::from(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nrom_mirrors_single_bank() {
        let m = Nrom;
        assert_eq!(m.prg_offset(PRG_BANK_SIZE, 0x8000), 0x0000);
        assert_eq!(m.prg_offset(PRG_BANK_SIZE, 0xC000), 0x0000);
        assert_eq!(m.prg_offset(PRG_BANK_SIZE, 0xFFFC), 0x3FFC);
        assert_eq!(m.prg_offset(2 * PRG_BANK_SIZE, 0xC000), 0x4000);
    }

    #[test]
    fn uxrom_switches_low_window_only() {
        let mut m = UxRom::default();
        let len = 8 * PRG_BANK_SIZE;
        assert_eq!(m.prg_offset(len, 0x8000), 0x0000);
        m.prg_write(0x8000, 0x03);
        assert_eq!(m.prg_offset(len, 0x8000), 3 * PRG_BANK_SIZE);
        // High window stays pinned to the last bank.
        assert_eq!(m.prg_offset(len, 0xC000), 7 * PRG_BANK_SIZE);
    }

    #[test]
    fn cnrom_banks_chr() {
        let mut m = Cnrom::default();
        m.prg_write(0x8000, 0x02);
        assert_eq!(m.chr_offset(0x0010), 2 * CHR_BANK_SIZE + 0x10);
    }
}
