//! The Apple-1 bus: RAM, the PIA at $D010-$D013, and the 256-byte
//! monitor ROM at $FF00-$FFFF.

use std::collections::VecDeque;

use emu_core::Bus;

const KBD: u16 = 0xD010;
const KBD_CR: u16 = 0xD011;
const DSP: u16 = 0xD012;
const DSP_CR: u16 = 0xD013;

const ROM_BASE: u16 = 0xFF00;
pub const ROM_LEN: usize = 256;

pub struct Apple1Bus {
    ram: Box<[u8; 0x10000]>,
    rom: [u8; ROM_LEN],
    keyboard: VecDeque<u8>,
    display: Vec<u8>,
}

impl Apple1Bus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x10000]),
            rom: [0; ROM_LEN],
            keyboard: VecDeque::new(),
            display: Vec::new(),
        }
    }

    pub fn load_rom(&mut self, image: &[u8; ROM_LEN]) {
        self.rom = *image;
    }

    /// Queue a keypress. The monitor polls KBDCR and reads KBD, which
    /// consumes one queued key per read.
    pub fn type_key(&mut self, key: u8) {
        self.keyboard.push_back(key);
    }

    /// Characters the program has written to the display register,
    /// high bit stripped.
    #[must_use]
    pub fn display_output(&self) -> &[u8] {
        &self.display
    }

    pub fn take_display_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.display)
    }

    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        if address >= ROM_BASE {
            self.rom[usize::from(address - ROM_BASE)]
        } else {
            self.ram[usize::from(address)]
        }
    }
}

impl Default for Apple1Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for Apple1Bus {
    fn read(&mut self, address: u16) -> u8 {
        match address {
            // Keyboard data, bit 7 forced high the way the hardware
            // presents ASCII. Reading consumes the pending key.
            KBD => self.keyboard.pop_front().map_or(0x80, |key| key | 0x80),
            // Bit 7: a key is waiting.
            KBD_CR => {
                if self.keyboard.is_empty() {
                    0x00
                } else {
                    0x80
                }
            }
            // Display always ready: bit 7 clear.
            DSP | DSP_CR => 0x00,
            _ if address >= ROM_BASE => self.rom[usize::from(address - ROM_BASE)],
            _ => self.ram[usize::from(address)],
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        match address {
            DSP => self.display.push(value & 0x7F),
            KBD | KBD_CR | DSP_CR => {}
            _ if address >= ROM_BASE => {}
            _ => self.ram[usize::from(address)] = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_ready_flag_tracks_queue() {
        let mut bus = Apple1Bus::new();
        assert_eq!(bus.read(KBD_CR), 0x00);
        bus.type_key(b'A');
        assert_eq!(bus.read(KBD_CR), 0x80);
        assert_eq!(bus.read(KBD), b'A' | 0x80);
        assert_eq!(bus.read(KBD_CR), 0x00);
    }

    #[test]
    fn display_write_strips_high_bit() {
        let mut bus = Apple1Bus::new();
        bus.write(DSP, b'H' | 0x80);
        bus.write(DSP, b'I');
        assert_eq!(bus.display_output(), b"HI");
    }

    #[test]
    fn rom_window_shadows_ram_and_ignores_writes() {
        let mut bus = Apple1Bus::new();
        let mut rom = [0u8; ROM_LEN];
        rom[0xFC] = 0x00;
        rom[0xFD] = 0xFF;
        bus.load_rom(&rom);
        bus.write(0xFF00, 0x42);
        assert_eq!(bus.read(0xFF00), 0x00);
        assert_eq!(bus.read(0xFFFD), 0xFF);
        bus.write(0x0200, 0x42);
        assert_eq!(bus.read(0x0200), 0x42);
    }
}
