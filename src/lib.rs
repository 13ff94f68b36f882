// Small console demonstrations of array, pointer and string mechanics.
//
// Each demo writes to any `io::Write` sink so tests can capture its output.

pub mod array_reverse;
pub mod cli;
pub mod config;
pub mod error;
pub mod pointer_step;
pub mod string_walk;

pub use config::DemoConfig;
pub use error::{DemoError, Result};

use std::io::Write;

/// Runs the three demos in order, separated by a blank line.
pub fn run_all(config: &DemoConfig, out: &mut impl Write) -> Result<()> {
    // Checked up front so a bad text never leaves the first two demos printed.
    string_walk::ensure_no_sentinel(&config.string.text)?;
    array_reverse::run(&config.array.numbers, out)?;
    writeln!(out)?;
    pointer_step::run(&config.pointer, out)?;
    writeln!(out)?;
    string_walk::run(&config.string.text, out)?;
    Ok(())
}
