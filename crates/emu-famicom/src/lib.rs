//! NES/Famicom machine emulation: CPU bus with PPU register file,
//! OAM DMA, controllers, and frame/NMI sequencing. Register-level
//! only; no rendering or audio synthesis.

mod bus;
mod controller;
mod famicom;
mod ppu;

pub use bus::FamicomBus;
pub use controller::{Button, Controller};
pub use famicom::{Famicom, STEPS_PER_FRAME};
pub use ppu::PpuRegisters;
