//! Machine abstraction for emulated systems.

/// Trait for emulated machines.
///
/// A machine owns its CPU, bus, and peripheral state as one unit.
/// Multiple machines can run side by side with zero sharing.
pub trait Machine {
    /// Reset the machine to its power-on state.
    fn reset(&mut self);

    /// Execute one instruction step.
    fn step(&mut self);

    /// Execute one frame's worth of instruction steps.
    fn run_frame(&mut self);

    /// Load a file (ROM image) into the machine.
    ///
    /// The machine determines the file type from the extension or
    /// contents. Returns an error description on failure; the machine
    /// is left unloaded, never half-loaded.
    fn load_file(&mut self, path: &str, data: &[u8]) -> Result<(), String>;
}
