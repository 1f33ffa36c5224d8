// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use readability::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    match readability::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
