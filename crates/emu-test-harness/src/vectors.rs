//! Single-instruction test vector format.
//!
//! Each JSON file holds an array of cases. A case gives the complete
//! CPU state and touched RAM cells before one instruction executes,
//! and the expected state afterwards:
//!
//! ```json
//! {
//!   "name": "a9 42",
//!   "initial": { "pc": 32768, "s": 253, "a": 0, "x": 0, "y": 0,
//!                "p": 36, "ram": [[32768, 169], [32769, 66]] },
//!   "final":   { "pc": 32770, "s": 253, "a": 66, "x": 0, "y": 0,
//!                "p": 36, "ram": [[32768, 169], [32769, 66]] }
//! }
//! ```

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub initial: CpuState,
    #[serde(rename = "final")]
    pub final_state: CpuState,
}

#[derive(Debug, Deserialize)]
pub struct CpuState {
    pub pc: u16,
    pub s: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    /// Address/value pairs; only these cells are set up and checked.
    pub ram: Vec<(u16, u8)>,
}
