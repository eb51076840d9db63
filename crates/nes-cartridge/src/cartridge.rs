//! iNES ROM parsing.

use log::info;
use thiserror::Error;

use crate::mapper::{Cnrom, Mapper, Nrom, UxRom};

const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const PRG_UNIT: usize = 0x4000;
const CHR_UNIT: usize = 0x2000;

#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("not an iNES file (bad magic)")]
    BadMagic,
    #[error("file truncated: need {expected} bytes, have {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("unsupported mapper {0}")]
    UnsupportedMapper(u8),
    #[error("header declares no PRG ROM")]
    NoPrgRom,
}

/// Nametable mirroring arrangement, from the iNES header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
}

/// A parsed cartridge: ROM data plus the mapper that addresses it.
#[derive(Debug)]
pub struct Cartridge {
    prg_rom: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,
    mirroring: Mirroring,
    mapper: Box<dyn Mapper>,
    mapper_number: u8,
}

impl Cartridge {
    /// Parse an iNES image.
    ///
    /// Supports mappers 0 (NROM), 2 (UxROM), and 3 (CNROM). A CHR
    /// size of zero in the header means the board carries 8 KiB of
    /// CHR RAM instead of ROM.
    pub fn from_ines(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_LEN {
            return Err(CartridgeError::Truncated {
                expected: HEADER_LEN,
                actual: data.len(),
            });
        }
        if &data[0..4] != b"NES\x1A" {
            return Err(CartridgeError::BadMagic);
        }

        if data[4] == 0 {
            return Err(CartridgeError::NoPrgRom);
        }
        let prg_len = usize::from(data[4]) * PRG_UNIT;
        let chr_len = usize::from(data[5]) * CHR_UNIT;
        let flags6 = data[6];
        let flags7 = data[7];
        let mapper_number = (flags6 >> 4) | (flags7 & 0xF0);
        let mirroring = if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let mut offset = HEADER_LEN;
        if flags6 & 0x04 != 0 {
            offset += TRAINER_LEN;
        }

        let expected = offset + prg_len + chr_len;
        if data.len() < expected {
            return Err(CartridgeError::Truncated {
                expected,
                actual: data.len(),
            });
        }

        let mapper: Box<dyn Mapper> = match mapper_number {
            0 => Box::new(Nrom),
            2 => Box::new(UxRom::default()),
            3 => Box::new(Cnrom::default()),
            n => return Err(CartridgeError::UnsupportedMapper(n)),
        };

        let prg_rom = data[offset..offset + prg_len].to_vec();
        let chr_is_ram = chr_len == 0;
        let chr = if chr_is_ram {
            vec![0; CHR_UNIT]
        } else {
            data[offset + prg_len..offset + prg_len + chr_len].to_vec()
        };

        info!(
            "loaded cartridge: mapper {mapper_number}, {} KiB PRG, {} KiB CHR{}, {mirroring:?} mirroring",
            prg_len / 1024,
            chr.len() / 1024,
            if chr_is_ram { " RAM" } else { "" },
        );

        Ok(Self {
            prg_rom,
            chr,
            chr_is_ram,
            mirroring,
            mapper,
            mapper_number,
        })
    }

    /// CPU read in $8000-$FFFF.
    #[must_use]
    pub fn prg_read(&self, address: u16) -> u8 {
        let offset = self.mapper.prg_offset(self.prg_rom.len(), address);
        self.prg_rom[offset % self.prg_rom.len()]
    }

    /// CPU write in $8000-$FFFF, routed to the mapper's bank latch.
    pub fn prg_write(&mut self, address: u16, value: u8) {
        self.mapper.prg_write(address, value);
    }

    /// PPU read in the pattern tables ($0000-$1FFF).
    #[must_use]
    pub fn chr_read(&self, address: u16) -> u8 {
        let offset = self.mapper.chr_offset(address);
        self.chr[offset % self.chr.len()]
    }

    /// PPU write in the pattern tables. Dropped unless the board has
    /// CHR RAM.
    pub fn chr_write(&mut self, address: u16, value: u8) {
        if self.chr_is_ram {
            let offset = self.mapper.chr_offset(address) % self.chr.len();
            self.chr[offset] = value;
        }
    }

    #[must_use]
    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    #[must_use]
    pub fn mapper_number(&self) -> u8 {
        self.mapper_number
    }
}
