use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use slogmig::cli::{Arguments, ExitStatus, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitStatus::Error.into()
        }
    }
}
