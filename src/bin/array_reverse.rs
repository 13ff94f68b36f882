use mechanics_demos::{array_reverse, cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run_demo("array_reverse", |config, out| {
        array_reverse::run(&config.array.numbers, out)
    })
}
