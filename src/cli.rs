// Shared entry-point plumbing for the demo binaries.

use crate::config::DemoConfig;
use crate::error::{DemoError, Result};
use colored::Colorize;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Sends logs to stderr, filtered by `RUST_LOG` and defaulting to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init in the same process is harmless, so the error is ignored.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// The only accepted argument is an optional path to a TOML config.
/// Flags and any second argument are rejected.
pub fn config_path_from_args(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let first = args.next();
    if let Some(arg) = args.next() {
        return Err(DemoError::UnexpectedArgument { arg });
    }
    match first {
        Some(arg) if arg.starts_with('-') => Err(DemoError::UnexpectedArgument { arg }),
        other => Ok(other.map(PathBuf::from)),
    }
}

pub fn format_error(err: &dyn std::error::Error) -> String {
    format!("{} {err}", "error:".red().bold())
}

/// Parses `args`, loads the config and runs `demo` against `out`.
///
/// Argument and config failures return before `demo` is called, so nothing
/// reaches `out`.
pub fn execute<W, F>(
    name: &str,
    args: impl Iterator<Item = String>,
    out: &mut W,
    demo: F,
) -> Result<()>
where
    W: Write,
    F: FnOnce(&DemoConfig, &mut W) -> Result<()>,
{
    let path = config_path_from_args(args)?;
    debug!(demo = name, config = ?path, "starting");

    let config = DemoConfig::resolve(path.as_deref())?;
    demo(&config, out)?;
    out.flush()?;
    Ok(())
}

fn exit_code(outcome: Result<()>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error(&err));
            ExitCode::FAILURE
        }
    }
}

/// Runs `demo` against stdout with the process arguments. Failures exit 1.
pub fn run_demo<F>(name: &str, demo: F) -> ExitCode
where
    F: FnOnce(&DemoConfig, &mut BufWriter<io::StdoutLock<'static>>) -> Result<()>,
{
    init_logging();
    let mut out = BufWriter::new(io::stdout().lock());
    exit_code(execute(name, std::env::args().skip(1), &mut out, demo))
}
