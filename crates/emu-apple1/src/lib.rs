//! Apple-1 machine emulation: 6502, 64 KiB RAM, the Woz monitor ROM
//! window at $FF00, and the PIA for keyboard input and display output.

mod bus;

pub use bus::{Apple1Bus, ROM_LEN};

use emu_core::{Cpu, Machine};
use mos_6502::Mos6502;

/// Instruction steps per frame at roughly 1 MHz / 60 Hz.
pub const STEPS_PER_FRAME: u64 = 17050;

pub struct Apple1 {
    pub cpu: Mos6502,
    pub bus: Apple1Bus,
}

impl Apple1 {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cpu: Mos6502::new(),
            bus: Apple1Bus::new(),
        }
    }

    pub fn type_key(&mut self, key: u8) {
        self.bus.type_key(key);
    }
}

impl Default for Apple1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine for Apple1 {
    fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
    }

    fn step(&mut self) {
        self.cpu.step(&mut self.bus);
    }

    fn run_frame(&mut self) {
        for _ in 0..STEPS_PER_FRAME {
            if !self.cpu.is_running() {
                break;
            }
            self.cpu.step(&mut self.bus);
        }
    }

    /// Load a 256-byte monitor ROM image into $FF00-$FFFF.
    fn load_file(&mut self, path: &str, data: &[u8]) -> Result<(), String> {
        let image: &[u8; ROM_LEN] = data
            .try_into()
            .map_err(|_| format!("{path}: monitor ROM must be exactly {ROM_LEN} bytes"))?;
        self.bus.load_rom(image);
        self.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ROM that echoes one key: poll KBDCR, read KBD, store to DSP,
    /// loop forever.
    fn echo_rom() -> [u8; ROM_LEN] {
        let mut rom = [0u8; ROM_LEN];
        let program: &[u8] = &[
            0xAD, 0x11, 0xD0, // LDA $D011
            0x10, 0xFB, //       BPL -5
            0xAD, 0x10, 0xD0, // LDA $D010
            0x8D, 0x12, 0xD0, // STA $D012
            0x4C, 0x00, 0xFF, // JMP $FF00
        ];
        rom[..program.len()].copy_from_slice(program);
        rom[0xFC] = 0x00; // reset vector -> $FF00
        rom[0xFD] = 0xFF;
        rom
    }

    #[test]
    fn load_file_requires_exact_rom_size() {
        let mut machine = Apple1::new();
        assert!(machine.load_file("short.rom", &[0u8; 100]).is_err());
        assert!(machine.load_file("wozmon.rom", &[0u8; ROM_LEN]).is_ok());
    }

    #[test]
    fn boots_from_rom_reset_vector() {
        let mut machine = Apple1::new();
        machine.load_file("wozmon.rom", &echo_rom()).unwrap();
        assert_eq!(machine.cpu.pc(), 0xFF00);
    }

    #[test]
    fn echoes_typed_key_to_display() {
        let mut machine = Apple1::new();
        machine.load_file("wozmon.rom", &echo_rom()).unwrap();
        machine.type_key(b'G');
        for _ in 0..16 {
            machine.step();
        }
        assert_eq!(machine.bus.display_output(), b"G");
    }
}
