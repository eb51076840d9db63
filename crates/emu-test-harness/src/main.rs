//! Conformance harness: runs single-instruction JSON vector files
//! against the 6502 core and reports every divergence.
//!
//! Usage: `emu-test-harness <file-or-directory>...`
//!
//! Directories are expanded to their `.json` entries. Files run in
//! parallel; the exit code is nonzero if any case fails.

mod runner;
mod vectors;

use std::path::PathBuf;
use std::process::ExitCode;

use rayon::prelude::*;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: emu-test-harness <file-or-directory>...");
        return ExitCode::from(2);
    }

    let files = match collect_files(&args) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let reports: Vec<runner::FileReport> = files.par_iter().map(|p| runner::run_file(p)).collect();

    let mut total = 0;
    let mut failed = 0;
    let mut broken_files = 0;
    for report in &reports {
        if let Some(error) = &report.error {
            broken_files += 1;
            eprintln!("{}: {error}", report.path.display());
            continue;
        }
        total += report.total;
        failed += report.failures.len();
        for failure in &report.failures {
            println!("{}: {failure}", report.path.display());
        }
        println!(
            "{}: {} cases, {} failures",
            report.path.display(),
            report.total,
            report.failures.len()
        );
    }
    println!("total: {total} cases, {failed} failures, {broken_files} unreadable files");

    if reports.iter().all(runner::FileReport::passed) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Expand arguments into the list of vector files: files pass through,
/// directories contribute their `.json` entries in sorted order.
fn collect_files(args: &[String]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for arg in args {
        let path = PathBuf::from(arg);
        if path.is_dir() {
            let entries = std::fs::read_dir(&path).map_err(|e| format!("{arg}: {e}"))?;
            let mut found: Vec<PathBuf> = entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            found.sort();
            files.append(&mut found);
        } else {
            files.push(path);
        }
    }
    Ok(files)
}
