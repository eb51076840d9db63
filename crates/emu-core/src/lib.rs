//! Core traits and types shared by all emulated machines.
//!
//! Execution is instruction-level: one CPU step decodes and executes one
//! whole instruction. Machines own their CPU and bus outright; there is
//! no global state and no sharing between machine instances.

mod bus;
mod cpu;
mod machine;

pub use bus::{Bus, SimpleBus};
pub use cpu::Cpu;
pub use machine::Machine;
