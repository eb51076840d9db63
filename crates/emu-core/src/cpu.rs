use crate::Bus;

/// A CPU that executes whole instructions.
///
/// The type parameter `B` is the bus type this CPU operates on. All
/// memory traffic goes through the bus; the CPU never touches platform
/// memory directly.
pub trait Cpu<B: Bus> {
    /// Decode and execute one instruction at the current program counter.
    fn step(&mut self, bus: &mut B);

    /// Reset the CPU: clear registers, load PC from the reset vector.
    fn reset(&mut self, bus: &mut B);

    /// Enter the non-maskable interrupt handler immediately.
    fn nmi(&mut self, bus: &mut B);

    /// Get the current program counter.
    fn pc(&self) -> u16;

    /// False once the CPU has halted (unimplemented opcode).
    fn is_running(&self) -> bool;
}
