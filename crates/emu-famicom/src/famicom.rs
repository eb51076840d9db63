//! The Famicom machine: CPU, bus, and frame sequencing.

use emu_core::{Cpu, Machine};
use mos_6502::Mos6502;
use nes_cartridge::Cartridge;

use crate::bus::FamicomBus;
use crate::ppu::PpuRegisters;

/// Instruction steps per NTSC frame.
pub const STEPS_PER_FRAME: u64 = 29780;

/// An owned Famicom instance. Multiple machines can run side by side.
pub struct Famicom {
    pub cpu: Mos6502,
    pub bus: FamicomBus,
    cycles: u64,
}

impl Famicom {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cpu: Mos6502::new(),
            bus: FamicomBus::new(),
            cycles: 0,
        }
    }

    /// Instructions executed since power-on.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn insert_cartridge(&mut self, cartridge: Cartridge) {
        self.bus.cartridge = Some(cartridge);
    }

    /// Cold boot: RAM and PPU state cleared, then a normal reset.
    pub fn power_cycle(&mut self) {
        self.bus.clear_ram();
        self.bus.ppu = PpuRegisters::new();
        self.cycles = 0;
        self.reset();
    }
}

impl Default for Famicom {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine for Famicom {
    fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.bus.ppu.vblank = false;
        self.bus.ppu.write_latch = false;
    }

    fn step(&mut self) {
        if !self.cpu.is_running() {
            return;
        }
        self.cpu.step(&mut self.bus);
        self.cycles += 1;
        if self.cycles % STEPS_PER_FRAME == 0 {
            self.bus.ppu.vblank = true;
        }
        if self.bus.ppu.vblank && self.bus.ppu.nmi_enable {
            self.cpu.nmi(&mut self.bus);
            // One NMI per vblank; the program re-arms it by writing
            // PPUCTRL again.
            self.bus.ppu.nmi_enable = false;
        }
    }

    fn run_frame(&mut self) {
        for _ in 0..STEPS_PER_FRAME {
            if !self.cpu.is_running() {
                break;
            }
            self.step();
        }
    }

    fn load_file(&mut self, path: &str, data: &[u8]) -> Result<(), String> {
        let cartridge = Cartridge::from_ines(data).map_err(|e| format!("{path}: {e}"))?;
        self.bus.cartridge = Some(cartridge);
        self.power_cycle();
        Ok(())
    }
}
