//! NES/Famicom cartridge support: iNES parsing and mapper emulation.

mod cartridge;
mod mapper;

pub use cartridge::{Cartridge, CartridgeError, Mirroring};
pub use mapper::{Cnrom, Mapper, Nrom, UxRom};
