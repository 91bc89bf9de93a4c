//! roomgen - generic Smash Hit room generator
//!
//! Writes a Lua room script that configures the environment, registers a
//! segment pool, and fills the room up to a target length.

use clap::Parser;
use std::process::ExitCode;

use roomgen_cli::{commands, Cli};

fn main() -> ExitCode {
    // Usage errors exit with code 2 before anything is opened.
    let cli = Cli::parse();

    match commands::generate::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
