//! Vector execution and state diffing.

use std::fs;
use std::path::{Path, PathBuf};

use emu_core::{Bus, Cpu, SimpleBus};
use mos_6502::{Mos6502, Status};

use crate::vectors::TestCase;

/// Outcome of one vector file.
pub struct FileReport {
    pub path: PathBuf,
    pub total: usize,
    pub failures: Vec<String>,
    /// Set when the file itself could not be read or parsed.
    pub error: Option<String>,
}

impl FileReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.failures.is_empty()
    }
}

/// Run every case in one JSON file. A failing case is reported and
/// the run continues; only an unreadable file aborts it.
pub fn run_file(path: &Path) -> FileReport {
    let mut report = FileReport {
        path: path.to_path_buf(),
        total: 0,
        failures: Vec::new(),
        error: None,
    };

    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            report.error = Some(format!("read failed: {e}"));
            return report;
        }
    };
    let cases: Vec<TestCase> = match serde_json::from_str(&data) {
        Ok(cases) => cases,
        Err(e) => {
            report.error = Some(format!("parse failed: {e}"));
            return report;
        }
    };

    report.total = cases.len();
    for case in &cases {
        for mismatch in run_case(case) {
            report.failures.push(format!("{}: {mismatch}", case.name));
        }
    }
    report
}

/// Execute one case: load the initial state, step once, diff every
/// register and every listed RAM cell. Returns one line per mismatch.
pub fn run_case(case: &TestCase) -> Vec<String> {
    let mut bus = SimpleBus::new();
    for &(address, value) in &case.initial.ram {
        bus.write(address, value);
    }

    let mut cpu = Mos6502::new();
    cpu.regs.pc = case.initial.pc;
    cpu.regs.s = case.initial.s;
    cpu.regs.a = case.initial.a;
    cpu.regs.x = case.initial.x;
    cpu.regs.y = case.initial.y;
    cpu.regs.p = Status(case.initial.p);

    cpu.step(&mut bus);

    let expected = &case.final_state;
    let mut mismatches = Vec::new();
    let mut check = |field: &str, expected: u16, actual: u16| {
        if expected != actual {
            mismatches.push(format!("{field}: expected ${expected:04X}, got ${actual:04X}"));
        }
    };
    check("pc", expected.pc, cpu.regs.pc);
    check("s", u16::from(expected.s), u16::from(cpu.regs.s));
    check("a", u16::from(expected.a), u16::from(cpu.regs.a));
    check("x", u16::from(expected.x), u16::from(cpu.regs.x));
    check("y", u16::from(expected.y), u16::from(cpu.regs.y));
    check("p", u16::from(expected.p), u16::from(cpu.regs.p.0));

    for &(address, value) in &expected.ram {
        let actual = bus.peek(address);
        if actual != value {
            mismatches.push(format!(
                "ram[${address:04X}]: expected ${value:02X}, got ${actual:02X}"
            ));
        }
    }
    mismatches
}
