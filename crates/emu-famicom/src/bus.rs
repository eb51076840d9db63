//! The Famicom CPU bus.
//!
//! Address map:
//!
//! | Range         | Device                                  |
//! |---------------|-----------------------------------------|
//! | $0000-$1FFF   | 2 KiB RAM, mirrored every $800          |
//! | $2000-$3FFF   | PPU registers, mirrored every 8         |
//! | $4000-$4013   | APU registers (write latch only)        |
//! | $4014         | OAM DMA                                 |
//! | $4015         | APU status                              |
//! | $4016-$4017   | Controller strobe / serial reads        |
//! | $4018-$401F   | Test registers (ignored)                |
//! | $4020-$7FFF   | Unmapped: reads 0, writes dropped       |
//! | $8000-$FFFF   | Cartridge PRG via mapper                |

use emu_core::Bus;
use log::warn;
use nes_cartridge::{Cartridge, Mirroring};

use crate::controller::Controller;
use crate::ppu::PpuRegisters;

pub struct FamicomBus {
    ram: [u8; 0x800],
    pub ppu: PpuRegisters,
    /// 2 KiB nametable RAM, indexed through the cartridge's mirroring.
    vram: [u8; 0x800],
    palette: [u8; 32],
    apu: [u8; 0x18],
    pub controllers: [Controller; 2],
    pub cartridge: Option<Cartridge>,
}

impl FamicomBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: [0; 0x800],
            ppu: PpuRegisters::new(),
            vram: [0; 0x800],
            palette: [0; 32],
            apu: [0; 0x18],
            controllers: [Controller::new(); 2],
            cartridge: None,
        }
    }

    pub fn clear_ram(&mut self) {
        self.ram = [0; 0x800];
        self.vram = [0; 0x800];
        self.palette = [0; 32];
        self.apu = [0; 0x18];
    }

    /// Side-effect-free read for debuggers and tests. PPU and
    /// controller registers read as 0 here since their real reads
    /// mutate latches.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        match address {
            0x0000..=0x1FFF => self.ram[usize::from(address & 0x07FF)],
            0x8000..=0xFFFF => self
                .cartridge
                .as_ref()
                .map_or(0, |cart| cart.prg_read(address)),
            _ => 0,
        }
    }

    /// Read in PPU address space (pattern tables, nametables, palette).
    fn ppu_read(&self, address: u16) -> u8 {
        match address {
            0x0000..=0x1FFF => self
                .cartridge
                .as_ref()
                .map_or(0, |cart| cart.chr_read(address)),
            0x2000..=0x3EFF => self.vram[self.nametable_index(address)],
            _ => self.palette[Self::palette_index(address)],
        }
    }

    fn ppu_write(&mut self, address: u16, value: u8) {
        match address {
            0x0000..=0x1FFF => {
                if let Some(cart) = self.cartridge.as_mut() {
                    cart.chr_write(address, value);
                }
            }
            0x2000..=0x3EFF => {
                let index = self.nametable_index(address);
                self.vram[index] = value;
            }
            _ => self.palette[Self::palette_index(address)] = value,
        }
    }

    /// Fold a nametable address into the 2 KiB of physical VRAM
    /// according to the cartridge's mirroring.
    fn nametable_index(&self, address: u16) -> usize {
        let address = usize::from(address - 0x2000) & 0x0FFF;
        let table = address / 0x400;
        let offset = address & 0x3FF;
        let mirroring = self
            .cartridge
            .as_ref()
            .map_or(Mirroring::Horizontal, Cartridge::mirroring);
        let physical = match mirroring {
            Mirroring::Vertical => table & 0x01,
            Mirroring::Horizontal => table >> 1,
        };
        physical * 0x400 + offset
    }

    /// Palette RAM index with the $3F10/$3F14/$3F18/$3F1C mirrors.
    fn palette_index(address: u16) -> usize {
        let index = usize::from(address & 0x1F);
        if index >= 0x10 && index % 4 == 0 {
            index - 0x10
        } else {
            index
        }
    }

    /// $4014 write: copy one 256-byte page into OAM, starting at the
    /// current OAM address.
    fn oam_dma(&mut self, page: u8) {
        let base = u16::from(page) << 8;
        for i in 0..=255u8 {
            let value = self.read(base + u16::from(i));
            let index = self.ppu.oam_addr.wrapping_add(i);
            self.ppu.oam[usize::from(index)] = value;
        }
    }
}

impl Default for FamicomBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for FamicomBus {
    fn read(&mut self, address: u16) -> u8 {
        match address {
            0x0000..=0x1FFF => self.ram[usize::from(address & 0x07FF)],
            0x2000..=0x3FFF => match address & 0x0007 {
                0x2 => self.ppu.read_status(),
                0x4 => self.ppu.read_oam(),
                0x7 => {
                    let value = self.ppu_read(self.ppu.vram_addr);
                    self.ppu.increment_vram_addr();
                    value
                }
                // Write-only registers read back as 0.
                _ => 0,
            },
            0x4016 => self.controllers[0].read(),
            0x4017 => self.controllers[1].read(),
            0x4000..=0x401F => 0,
            0x4020..=0x7FFF => 0,
            0x8000..=0xFFFF => self
                .cartridge
                .as_ref()
                .map_or(0, |cart| cart.prg_read(address)),
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        match address {
            0x0000..=0x1FFF => self.ram[usize::from(address & 0x07FF)] = value,
            0x2000..=0x3FFF => match address & 0x0007 {
                0x0 => self.ppu.write_ctrl(value),
                0x1 => self.ppu.mask = value,
                0x3 => self.ppu.oam_addr = value,
                0x4 => self.ppu.write_oam(value),
                0x5 => self.ppu.write_scroll(value),
                0x6 => self.ppu.write_addr(value),
                0x7 => {
                    self.ppu_write(self.ppu.vram_addr, value);
                    self.ppu.increment_vram_addr();
                }
                // PPUSTATUS is read-only.
                _ => {}
            },
            0x4014 => self.oam_dma(value),
            0x4016 => {
                self.controllers[0].write_strobe(value);
                self.controllers[1].write_strobe(value);
            }
            0x4000..=0x4017 => self.apu[usize::from(address - 0x4000)] = value,
            0x4018..=0x401F => {}
            0x4020..=0x7FFF => {
                warn!("write to unmapped address ${address:04X} dropped");
            }
            0x8000..=0xFFFF => {
                if let Some(cart) = self.cartridge.as_mut() {
                    cart.prg_write(address, value);
                } else {
                    warn!("write to cartridge space ${address:04X} with no cartridge");
                }
            }
        }
    }
}
