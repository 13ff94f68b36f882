use mechanics_demos::{cli, run_all};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run_demo("all", |config, out| run_all(config, out))
}
