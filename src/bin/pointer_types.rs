use mechanics_demos::{cli, pointer_step};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run_demo("pointer_types", |config, out| {
        pointer_step::run(&config.pointer, out)
    })
}
