//! PPU register file.
//!
//! Register-level only: the latches, counters, and memories a program
//! observes through $2000-$2007. No rendering.

/// PPUCTRL bit 7: generate NMI at vblank.
const CTRL_NMI_ENABLE: u8 = 0x80;

/// PPUCTRL bit 2: PPUDATA address increment of 32 instead of 1.
const CTRL_INCREMENT_32: u8 = 0x04;

#[derive(Debug, Clone)]
pub struct PpuRegisters {
    pub ctrl: u8,
    pub mask: u8,
    /// In vertical blank. Set at the frame boundary, cleared by a
    /// PPUSTATUS read.
    pub vblank: bool,
    /// NMI pending enable. Tracks PPUCTRL bit 7 but is cleared after
    /// an NMI fires so each vblank delivers at most one.
    pub nmi_enable: bool,
    pub oam_addr: u8,
    pub oam: [u8; 256],
    pub scroll_x: u8,
    pub scroll_y: u8,
    /// Shared first/second-write toggle for PPUSCROLL and PPUADDR.
    pub write_latch: bool,
    /// Current VRAM address for PPUDATA access (14 bits).
    pub vram_addr: u16,
}

impl PpuRegisters {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ctrl: 0,
            mask: 0,
            vblank: false,
            nmi_enable: false,
            oam_addr: 0,
            oam: [0; 256],
            scroll_x: 0,
            scroll_y: 0,
            write_latch: false,
            vram_addr: 0,
        }
    }

    pub fn write_ctrl(&mut self, value: u8) {
        self.ctrl = value;
        self.nmi_enable = value & CTRL_NMI_ENABLE != 0;
    }

    /// PPUSTATUS read value. Clears vblank and the write latch.
    pub fn read_status(&mut self) -> u8 {
        let value = u8::from(self.vblank) << 7;
        self.vblank = false;
        self.write_latch = false;
        value
    }

    pub fn write_scroll(&mut self, value: u8) {
        if self.write_latch {
            self.scroll_y = value;
        } else {
            self.scroll_x = value;
        }
        self.write_latch = !self.write_latch;
    }

    /// PPUADDR write: high byte first, then low.
    pub fn write_addr(&mut self, value: u8) {
        if self.write_latch {
            self.vram_addr = (self.vram_addr & 0xFF00) | u16::from(value);
        } else {
            self.vram_addr = (self.vram_addr & 0x00FF) | (u16::from(value) << 8);
        }
        self.vram_addr &= 0x3FFF;
        self.write_latch = !self.write_latch;
    }

    /// Advance the VRAM address after a PPUDATA access.
    pub fn increment_vram_addr(&mut self) {
        let step = if self.ctrl & CTRL_INCREMENT_32 != 0 {
            32
        } else {
            1
        };
        self.vram_addr = self.vram_addr.wrapping_add(step) & 0x3FFF;
    }

    pub fn read_oam(&self) -> u8 {
        self.oam[usize::from(self.oam_addr)]
    }

    pub fn write_oam(&mut self, value: u8) {
        self.oam[usize::from(self.oam_addr)] = value;
        self.oam_addr = self.oam_addr.wrapping_add(1);
    }
}

impl Default for PpuRegisters {
    fn default() -> Self {
        Self::new()
    }
}
