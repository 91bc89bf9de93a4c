//! roomgen CLI library.
//!
//! This crate provides the argument table, output handling, and the generate
//! command behind the `roomgen` binary.

pub mod cli_args;
pub mod commands;
pub mod output;

pub use cli_args::Cli;
pub use output::OutputTarget;
