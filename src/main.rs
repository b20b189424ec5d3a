use clap::Parser;
use stockcast::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
