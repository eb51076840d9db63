//! Standard controller: strobe latch plus 8-bit shift register.

/// Controller buttons, in shift-register order (A reads out first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A = 0x01,
    B = 0x02,
    Select = 0x04,
    Start = 0x08,
    Up = 0x10,
    Down = 0x20,
    Left = 0x40,
    Right = 0x80,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Controller {
    buttons: u8,
    shift: u8,
    strobe: bool,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.buttons |= button as u8;
        } else {
            self.buttons &= !(button as u8);
        }
    }

    /// $4016 write. While strobe is high the shift register reloads
    /// continuously; dropping it latches the current buttons.
    pub fn write_strobe(&mut self, value: u8) {
        self.strobe = value & 0x01 != 0;
        if self.strobe {
            self.shift = self.buttons;
        }
    }

    /// Serial read: one button bit, A first. After all eight bits
    /// have shifted out, further reads return 1.
    pub fn read(&mut self) -> u8 {
        if self.strobe {
            return self.buttons & 0x01;
        }
        let bit = self.shift & 0x01;
        self.shift = (self.shift >> 1) | 0x80;
        bit
    }
}
