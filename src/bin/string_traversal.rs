use mechanics_demos::{cli, string_walk};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run_demo("string_traversal", |config, out| {
        string_walk::run(&config.string.text, out)
    })
}
